//! Cheap per-transcript summaries for list and dashboard views.
//!
//! Runs only the line classifier, never the renderer, so counts always match
//! what a full parse under any format mode would report.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::io::{self, IoError};
use crate::parsing::{LineClass, SpeakerStats, TranscriptLineClassifier};

/// How many speakers a summary lists.
pub const TOP_SPEAKERS: usize = 3;

/// Summary of a transcript file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptStats {
    /// Number of speaker lines.
    pub total_messages: usize,
    /// Up to [`TOP_SPEAKERS`] names, busiest first.
    pub top_speakers: Vec<String>,
    /// Last-modified date, `YYYY-MM-DD`, or [`TranscriptStats::UNKNOWN_DATE`].
    pub date: String,
}

impl TranscriptStats {
    pub const UNKNOWN_DATE: &'static str = "Unknown";

    /// The summary reported when a transcript cannot be read.
    pub fn unknown() -> Self {
        Self {
            total_messages: 0,
            top_speakers: vec![],
            date: Self::UNKNOWN_DATE.to_string(),
        }
    }

    pub fn from_counts(counts: &SpeakerStats, date: impl Into<String>) -> Self {
        Self {
            total_messages: counts.total(),
            top_speakers: counts.top(TOP_SPEAKERS),
            date: date.into(),
        }
    }
}

/// Counts speaker lines without rendering anything.
pub fn speaker_counts(text: &str) -> SpeakerStats {
    let classifier = TranscriptLineClassifier;
    let mut counts = SpeakerStats::new();
    for line in io::transcript_lines(text) {
        if let LineClass::Speaker { name, .. } = classifier.classify(line) {
            counts.increment(name);
        }
    }
    counts
}

/// Summarises transcript text with a caller-supplied date.
pub fn stats_from_text(text: &str, date: impl Into<String>) -> TranscriptStats {
    TranscriptStats::from_counts(&speaker_counts(text), date)
}

/// Summarises a transcript file.
///
/// Best effort: any failure yields [`TranscriptStats::unknown`].
pub fn extract_stats(path: &Path) -> TranscriptStats {
    match try_extract_stats(path) {
        Ok(stats) => stats,
        Err(e) => {
            log::warn!("Could not summarise transcript {}: {e}", path.display());
            TranscriptStats::unknown()
        }
    }
}

fn try_extract_stats(path: &Path) -> Result<TranscriptStats, IoError> {
    let date = modified_date(path)?;
    let text = io::read_transcript(path)?;
    Ok(stats_from_text(&text, date))
}

/// Last-modified date of a file in local time, `YYYY-MM-DD`.
pub fn modified_date(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let modified = fs::metadata(path)?.modified()?;
    let datetime: DateTime<Local> = modified.into();
    Ok(datetime.format("%Y-%m-%d").to_string())
}
