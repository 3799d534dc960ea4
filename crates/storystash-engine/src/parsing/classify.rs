use super::kinds::{Aside, SpeakerTag};

/// Classification of a single transcript line.
///
/// This is phase 1 of transcript parsing: each line is classified on its own,
/// without reference to surrounding lines. Only block attachment (phase 2,
/// [`super::BlockBuilder`]) depends on state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace only.
    Blank,
    /// `((...))`, with the inner text already stripped.
    Aside { text: &'a str },
    /// A recognised speaker tag and the spoken remainder (possibly empty).
    Speaker { name: &'a str, remainder: &'a str },
    /// Anything else, trimmed.
    Continuation { text: &'a str },
}

/// Classifies individual transcript lines.
pub struct TranscriptLineClassifier;

impl TranscriptLineClassifier {
    /// Classifies a raw line. Surrounding whitespace is ignored.
    ///
    /// Precedence: blank, then aside, then speaker tag, then continuation.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }

        if let Some(text) = Aside::inner(trimmed) {
            return LineClass::Aside { text };
        }

        if let Some(m) = SpeakerTag::parse(trimmed) {
            return LineClass::Speaker {
                name: m.name,
                remainder: m.remainder,
            };
        }

        LineClass::Continuation { text: trimmed }
    }
}
