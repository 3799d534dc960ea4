use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary stories directory
pub fn create_test_stories_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a transcript file with content, creating campaign folders as needed
pub fn create_test_file(stories_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    create_test_file_bytes(stories_dir, filename, content.as_bytes())
}

/// Create a transcript file from raw bytes
pub fn create_test_file_bytes(stories_dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = stories_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
