//! Summary cache for avoiding redundant API calls

use crate::bridge::Summary;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Key for cache lookups
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct CacheKey {
    file_name: String,
    content_hash: u64,
}

impl CacheKey {
    fn new(file_name: &str, code: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_hash: compute_content_hash(code),
        }
    }
}

/// Session-lifetime store of generated summaries.
///
/// Editing a file changes its hash, so stale text is never returned.
#[derive(Debug, Default)]
pub struct SummaryCache {
    entries: HashMap<CacheKey, Summary>,
    hits: u64,
    misses: u64,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, file_name: &str, code: &str) -> Option<Summary> {
        match self.entries.get(&CacheKey::new(file_name, code)) {
            Some(summary) => {
                self.hits += 1;
                Some(summary.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, file_name: &str, code: &str, summary: Summary) {
        self.entries.insert(CacheKey::new(file_name, code), summary);
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Compute a simple hash of file content for cache invalidation
pub fn compute_content_hash(content: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}
