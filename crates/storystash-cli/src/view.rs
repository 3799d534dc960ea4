//! Plain-text presentation of parsed transcripts for the terminal.

use std::sync::OnceLock;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;
use storystash_engine::{Block, ParsedTranscript, TranscriptStats};

const CAST_SHOWN: usize = 4;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"))
}

/// Drops markup tags and decodes entities, leaving the text a reader sees.
pub fn plain_text(html: &str) -> String {
    let stripped = tag_regex().replace_all(html, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Terminal lines for a parsed transcript, one blank line between blocks.
pub fn transcript_lines(parsed: &ParsedTranscript) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in &parsed.blocks {
        match block {
            Block::OutOfCharacter { text } => {
                lines.push(Line::from(Span::styled(
                    format!("(( {} ))", plain_text(text)),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Block::Dialogue { speaker, lines: body } => {
                lines.push(Line::from(Span::styled(
                    speaker.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                for line in body {
                    let style = if line.is_action_line {
                        Style::default().add_modifier(Modifier::ITALIC)
                    } else {
                        Style::default()
                    };
                    for text in plain_text(&line.content).lines() {
                        lines.push(Line::from(Span::styled(format!("  {text}"), style)));
                    }
                }
            }
            Block::Narrative { text } => {
                for text in plain_text(text).lines() {
                    lines.push(Line::from(text.to_string()));
                }
            }
        }
        lines.push(Line::default());
    }
    lines
}

/// Pane title: the busiest speakers, then date and message count.
pub fn title(parsed: &ParsedTranscript, stats: &TranscriptStats) -> String {
    let cast: Vec<_> = parsed
        .stats
        .ranked()
        .into_iter()
        .take(CAST_SHOWN)
        .map(|(name, _)| name)
        .collect();
    let cast = if cast.is_empty() {
        "no speakers".to_string()
    } else {
        cast.join(", ")
    };
    format!(
        "{cast} | {} | {} messages",
        stats.date, stats.total_messages
    )
}
