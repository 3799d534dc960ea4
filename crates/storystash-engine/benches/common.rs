// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_transcript(rounds: usize) -> String {
    let base = "Alice: Hello there, *waves* at **everyone**.\n*sits down*\n\n[Bob -> Alice]: \"Hi!\" he says.\nThe fire crackles.\n((brb, pizza))\nNarrator: The night grows colder.\n";
    base.repeat(rounds)
}
