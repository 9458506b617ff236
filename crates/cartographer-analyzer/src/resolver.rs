//! Import-string to file resolution

use cartographer_core::{MatchStrategy, NodeId};
use std::collections::HashMap;

/// Extensions tried, in order, when an import omits one.
pub const KNOWN_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".py", ".java", ".cpp", ".c", ".h"];

/// Lookup table from file name to node, in upload order.
///
/// When two uploaded files share a name the later one wins, but the entry
/// keeps the position of the first.
#[derive(Debug, Default)]
pub struct FileIndex {
    entries: Vec<(String, NodeId)>,
    positions: HashMap<String, usize>,
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, id: NodeId) {
        match self.positions.get(name) {
            Some(&pos) => self.entries[pos].1 = id,
            None => {
                self.positions.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), id));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.positions.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an import string to a file. First strategy to match wins.
    pub fn resolve(&self, import: &str) -> Option<(NodeId, MatchStrategy)> {
        if let Some(id) = self.get(import) {
            return Some((id, MatchStrategy::Exact));
        }

        for ext in KNOWN_EXTENSIONS {
            if let Some(id) = self.get(&format!("{import}{ext}")) {
                return Some((id, MatchStrategy::Extension));
            }
        }

        self.entries
            .iter()
            .find(|(name, _)| substring_match(name, import))
            .map(|&(_, id)| (id, MatchStrategy::Substring))
    }
}

/// Bidirectional containment between a file name and an import string.
fn substring_match(file_name: &str, import: &str) -> bool {
    if file_name.contains(import) {
        return true;
    }
    let stem = strip_last_extension(file_name);
    // An empty stem (".env") would be contained in every import.
    !stem.is_empty() && import.contains(stem)
}

/// `file_name` without its final `.ext`, if any. A trailing dot is not an extension.
fn strip_last_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}
