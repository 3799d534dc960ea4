//! # Transcript Parsing
//!
//! Two-phase parsing of line-oriented chat logs.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (blank, aside, speaker, continuation) from local facts only
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open dialogue block, renders every kept line, and counts speakers
//!
//! ## Modules
//!
//! - **`kinds`**: syntax knowledge per construct (`Aside`, `SpeakerTag`)
//! - **`classify`**: `TranscriptLineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine
//! - **`types`**: `Block`, `Line`, `SpeakerStats`, `ParsedTranscript`
//!
//! ## Key Invariants
//!
//! - Classification never depends on previous lines
//! - Every speaker line opens exactly one new dialogue block
//! - Parsing holds no state across calls

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::io;
use crate::render::{FormatMode, RenderConfig, Renderer};

pub use builder::BlockBuilder;
pub use classify::{LineClass, TranscriptLineClassifier};
pub use types::{Block, Line, ParsedTranscript, SpeakerStats};

/// Parses transcript text into display blocks and speaker counts.
pub fn parse_transcript(text: &str, mode: FormatMode, config: &RenderConfig) -> ParsedTranscript {
    let classifier = TranscriptLineClassifier;
    let mut builder = BlockBuilder::new(Renderer::new(mode, config));

    for line in io::transcript_lines(text) {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    let parsed = builder.finish();
    log::debug!(
        "Parsed transcript as {mode}: {} blocks, {} speakers",
        parsed.blocks.len(),
        parsed.stats.len()
    );
    parsed
}

/// Reads and parses a transcript file.
///
/// Best effort: an unreadable or missing file yields an empty result.
pub fn parse_file(path: &Path, mode: FormatMode, config: &RenderConfig) -> ParsedTranscript {
    match io::read_transcript(path) {
        Ok(text) => parse_transcript(&text, mode, config),
        Err(e) => {
            log::warn!("Could not read transcript {}: {e}", path.display());
            ParsedTranscript::default()
        }
    }
}
