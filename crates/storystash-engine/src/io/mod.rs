use crate::models::TranscriptFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of transcripts.
pub const TRANSCRIPT_EXT: &str = "txt";

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid stories directory: {0}")]
    InvalidStoriesDir(String),
}

/// Decode transcript bytes as UTF-8.
///
/// A leading byte-order mark is dropped and undecodable byte sequences are
/// skipped rather than replaced.
pub fn decode_transcript(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Strip a leading byte-order mark from already decoded text
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(UTF8_BOM).unwrap_or(text)
}

/// Split transcript text into lines, dropping a leading byte-order mark.
///
/// `\r\n`, `\n` and a lone `\r` all end a line. Like [`str::lines`], a
/// trailing line ending does not produce an extra empty line.
pub fn transcript_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(strip_bom(text));
    std::iter::from_fn(move || {
        let s = rest?;
        match s.find(['\r', '\n']) {
            Some(i) => {
                let ending = if s[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&s[i + ending..]);
                Some(&s[..i])
            }
            None => {
                rest = None;
                (!s.is_empty()).then_some(s)
            }
        }
    })
}

/// Read and decode a transcript file
pub fn read_transcript(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(decode_transcript(&bytes))
}

/// Read a transcript given its path relative to the stories root
pub fn read_transcript_at(
    relative_path: &RelativePath,
    stories_root: &Path,
) -> Result<String, IoError> {
    read_transcript(&relative_path.to_path(stories_root))
}

/// Scan for transcripts in the stories root and its campaign folders.
///
/// Campaigns are the immediate subdirectories of the root; deeper folders
/// are not scanned.
pub fn scan_transcripts(stories_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_stories_dir(stories_root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(stories_root)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_transcripts(&path, &mut files)?;
        } else if is_transcript(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// List transcripts as [`TranscriptFile`]s relative to the stories root
pub fn list_transcript_files(stories_root: &Path) -> Result<Vec<TranscriptFile>, IoError> {
    let files = scan_transcripts(stories_root)?
        .into_iter()
        .filter_map(|path| {
            let relative = path.strip_prefix(stories_root).ok()?;
            RelativePathBuf::from_path(relative).ok()
        })
        .map(TranscriptFile::new)
        .collect();
    Ok(files)
}

fn collect_transcripts(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_transcript(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_transcript(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == TRANSCRIPT_EXT)
}

pub fn validate_stories_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidStoriesDir(
            "stories directory not found".to_string(),
        ));
    }

    Ok(())
}
