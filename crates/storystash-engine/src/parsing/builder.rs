use crate::render::{Renderer, escape};

use super::{
    classify::LineClass,
    types::{Block, Line, ParsedTranscript, SpeakerStats},
};

/// The block currently accepting continuation lines.
#[derive(Debug)]
enum OpenBlock {
    None,
    Dialogue { speaker: String, lines: Vec<Line> },
}

/// State machine turning classified lines into [`Block`]s.
///
/// At most one dialogue block is open at a time. Every speaker line and every
/// aside closes it; blank lines leave it open.
pub struct BlockBuilder<'r> {
    renderer: Renderer<'r>,
    open: OpenBlock,
    out: Vec<Block>,
    stats: SpeakerStats,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(renderer: Renderer<'r>) -> Self {
        Self {
            renderer,
            open: OpenBlock::None,
            out: vec![],
            stats: SpeakerStats::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Blank => {}
            LineClass::Aside { text } => {
                self.flush_dialogue();
                self.out.push(Block::OutOfCharacter { text: escape(text) });
            }
            LineClass::Speaker { name, remainder } => self.open_dialogue(name, remainder),
            LineClass::Continuation { text } => self.continue_or_narrate(text),
        }
    }

    pub fn finish(mut self) -> ParsedTranscript {
        // EOF flush
        self.flush_dialogue();
        ParsedTranscript {
            blocks: self.out,
            stats: self.stats,
        }
    }

    fn open_dialogue(&mut self, name: &str, remainder: &str) {
        self.flush_dialogue();
        self.stats.increment(name);

        let mut lines = vec![];
        if !remainder.is_empty() {
            lines.push(self.renderer.render(remainder).into());
        }
        self.open = OpenBlock::Dialogue {
            speaker: name.to_string(),
            lines,
        };
    }

    fn continue_or_narrate(&mut self, text: &str) {
        let line: Line = self.renderer.render(text).into();
        match &mut self.open {
            OpenBlock::Dialogue { lines, .. } => lines.push(line),
            // Unattributed lines outside dialogue are never merged.
            OpenBlock::None => self.out.push(Block::Narrative { text: line.content }),
        }
    }

    fn flush_dialogue(&mut self) {
        let prev = std::mem::replace(&mut self.open, OpenBlock::None);
        if let OpenBlock::Dialogue { speaker, lines } = prev {
            self.out.push(Block::Dialogue { speaker, lines });
        }
    }
}
