use relative_path::{RelativePath, RelativePathBuf};
use serde::Serialize;

/// A transcript identified by its path relative to the stories root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptFile {
    relative_path: RelativePathBuf,
    display_name: String,
    campaign: Option<String>,
}

impl TranscriptFile {
    /// Create a new TranscriptFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        let campaign = Self::extract_campaign(&relative_path);

        Self {
            relative_path,
            display_name,
            campaign,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (file name without .txt extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The campaign folder this transcript lives in, `None` when unsorted
    pub fn campaign(&self) -> Option<&str> {
        self.campaign.as_deref()
    }

    /// `campaign/name` for nested transcripts, the bare name otherwise
    pub fn label(&self) -> String {
        match &self.campaign {
            Some(campaign) => format!("{campaign}/{}", self.display_name),
            None => self.display_name.clone(),
        }
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".txt").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }

    fn extract_campaign(path: &RelativePath) -> Option<String> {
        let parent = path.parent()?;
        let first = parent.components().next()?;
        Some(first.as_str().to_string())
    }
}

impl From<RelativePathBuf> for TranscriptFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for TranscriptFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
