pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod search;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{Block, Line, ParsedTranscript, SpeakerStats, parse_file, parse_transcript};
pub use render::{FormatMode, RenderConfig, Rendered, Renderer};
pub use search::{SearchHit, search_dir, search_transcript};
pub use stats::{TranscriptStats, extract_stats, speaker_counts, stats_from_text};
