pub mod transcript_file;

pub use transcript_file::TranscriptFile;
