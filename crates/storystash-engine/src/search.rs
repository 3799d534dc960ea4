//! Case-insensitive search across transcripts.

use std::path::Path;

use serde::Serialize;

use crate::io::{self, IoError};
use crate::models::TranscriptFile;

/// Matching lines reported per transcript.
pub const MAX_MATCHES_PER_FILE: usize = 3;
/// Lines longer than this (in characters) are cut to a window around the match.
pub const MAX_LINE_CHARS: usize = 150;
const CONTEXT_BEFORE: usize = 50;
const CONTEXT_AFTER: usize = 100;
const ELLIPSIS: &str = "...";

/// A transcript with at least one matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub file: TranscriptFile,
    pub matches: Vec<String>,
}

/// Returns up to [`MAX_MATCHES_PER_FILE`] trimmed lines containing `query`.
pub fn search_transcript(text: &str, query: &str) -> Vec<String> {
    let needle = fold(query);
    if needle.is_empty() {
        return vec![];
    }

    io::transcript_lines(text)
        .map(str::trim)
        .filter_map(|line| {
            let chars: Vec<char> = line.chars().collect();
            let (folded, origin) = fold_with_origin(&chars);
            find(&folded, &needle).map(|at| excerpt(&chars, origin[at]))
        })
        .take(MAX_MATCHES_PER_FILE)
        .collect()
}

/// Searches every transcript under `stories_root`.
///
/// Files that cannot be read are skipped.
pub fn search_dir(stories_root: &Path, query: &str) -> Result<Vec<SearchHit>, IoError> {
    let mut hits = vec![];
    for file in io::list_transcript_files(stories_root)? {
        let text = match io::read_transcript_at(file.relative_path(), stories_root) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Skipping {} during search: {e}", file.relative_path());
                continue;
            }
        };
        let matches = search_transcript(&text, query);
        if !matches.is_empty() {
            hits.push(SearchHit { file, matches });
        }
    }
    Ok(hits)
}

/// Full lowercase of `chars`, with the index of the source character for
/// each folded one. Some characters lowercase to several (`İ` to `i̇`).
fn fold_with_origin(chars: &[char]) -> (Vec<char>, Vec<usize>) {
    let mut folded = Vec::with_capacity(chars.len());
    let mut origin = Vec::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(i);
        }
    }
    (folded, origin)
}

fn fold(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn excerpt(chars: &[char], at: usize) -> String {
    if chars.len() <= MAX_LINE_CHARS {
        return chars.iter().collect();
    }
    let start = at.saturating_sub(CONTEXT_BEFORE);
    let end = (at + CONTEXT_AFTER).min(chars.len());
    let window: String = chars[start..end].iter().collect();
    format!("{ELLIPSIS}{window}{ELLIPSIS}")
}
