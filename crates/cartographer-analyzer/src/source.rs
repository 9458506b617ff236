//! Input files as handed to the analyzer

use serde::{Deserialize, Serialize};

/// A file selected for analysis: its name, where it came from and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    /// Path relative to the selected folder; the bare name for loose files.
    pub path: String,
    pub content: String,
    /// Size in bytes as reported by the filesystem or the browser.
    pub size: u64,
    /// Modification time in milliseconds since the epoch, when known.
    #[serde(default)]
    pub modified: Option<u64>,
}

impl SourceFile {
    /// A loose file whose path is its name and whose size is its content length.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let content = content.into();
        SourceFile {
            path: name.clone(),
            size: content.len() as u64,
            name,
            content,
            modified: None,
        }
    }

    /// Identity used to drop repeated selections of the same file.
    pub fn staging_key(&self) -> String {
        format!("{}|{}|{}", self.path, self.size, self.modified.unwrap_or(0))
    }
}
