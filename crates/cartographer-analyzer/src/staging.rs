//! Deduplicated set of files waiting to be analyzed

use crate::source::SourceFile;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct StagingArea {
    files: Vec<SourceFile>,
    keys: HashSet<String>,
}

impl StagingArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add files not already staged. Returns how many were added.
    pub fn stage(&mut self, incoming: impl IntoIterator<Item = SourceFile>) -> usize {
        let mut added = 0;
        for file in incoming {
            if self.keys.insert(file.staging_key()) {
                self.files.push(file);
                added += 1;
            }
        }
        added
    }

    /// Remove the file at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<SourceFile> {
        if index >= self.files.len() {
            return None;
        }
        let file = self.files.remove(index);
        self.keys.remove(&file.staging_key());
        Some(file)
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.keys.clear();
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Hand the staged files over for analysis, leaving the area empty.
    pub fn take(&mut self) -> Vec<SourceFile> {
        self.keys.clear();
        std::mem::take(&mut self.files)
    }
}
