use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::render::Rendered;

/// A display block, emitted in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// An out-of-character aside. Never continued.
    #[serde(rename = "ooc")]
    OutOfCharacter {
        /// Escaped aside text, without the surrounding parens.
        text: String,
    },
    /// Consecutive lines attributed to one speaker.
    Dialogue {
        /// Raw speaker name as written in the transcript.
        speaker: String,
        lines: Vec<Line>,
    },
    /// A standalone line with no speaker and no open dialogue.
    Narrative {
        /// Rendered text.
        text: String,
    },
}

impl Block {
    /// The speaker of a dialogue block.
    pub fn speaker(&self) -> Option<&str> {
        match self {
            Block::Dialogue { speaker, .. } => Some(speaker),
            _ => None,
        }
    }
}

/// One rendered line of a dialogue block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Rendered content; the markup depends on the format mode.
    pub content: String,
    /// True only in star mode, when the raw line is wrapped in `*`.
    pub is_action_line: bool,
}

impl From<Rendered> for Line {
    fn from(r: Rendered) -> Self {
        Self {
            content: r.html,
            is_action_line: r.is_action_line,
        }
    }
}

/// Message counts per speaker, in first-occurrence order.
///
/// Names are compared exactly (case-sensitive). The order matters: it breaks
/// ties when ranking speakers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerStats {
    counts: Vec<(String, usize)>,
}

impl SpeakerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one message for `name`, registering the speaker on first sight.
    pub fn increment(&mut self, name: &str) {
        match self.counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((name.to_string(), 1)),
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, count)| *count)
    }

    /// Number of distinct speakers.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all message counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Speakers and counts in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// All speakers by descending count. Ties keep first-occurrence order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // Stable sort: equal counts stay in insertion order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The first `n` names of [`SpeakerStats::ranked`].
    pub fn top(&self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

impl Serialize for SpeakerStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (name, count) in &self.counts {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// The result of parsing one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTranscript {
    pub blocks: Vec<Block>,
    pub stats: SpeakerStats,
}

impl ParsedTranscript {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of dialogue blocks.
    pub fn dialogue_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Dialogue { .. }))
            .count()
    }
}
