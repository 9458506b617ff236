//! Regex-based import/export extractors, one per language family

pub mod javascript;
pub mod python;
pub mod java;
pub mod c;

use cartographer_core::file_extension;
use regex::Regex;

/// Import targets and declared names pulled from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Import strings in order of appearance, duplicates kept.
    pub imports: Vec<String>,
    /// Declaration names treated as exports.
    pub exports: Vec<String>,
}

/// Pattern-matching extractor for a language family.
///
/// Extraction never fails: text the patterns do not recognise is skipped.
pub trait LanguageExtractor: Send + Sync {
    fn extract(&self, content: &str) -> Extraction;

    fn name(&self) -> &'static str;
}

/// Get the extractor for a file name, or `None` for unsupported extensions.
pub fn get_extractor(file_name: &str) -> Option<Box<dyn LanguageExtractor>> {
    match file_extension(file_name).as_str() {
        "js" | "jsx" | "ts" | "tsx" => Some(Box::new(javascript::JavaScriptExtractor)),
        "py" => Some(Box::new(python::PythonExtractor)),
        "java" => Some(Box::new(java::JavaExtractor)),
        "c" | "cpp" | "h" => Some(Box::new(c::CExtractor)),
        _ => None,
    }
}

/// Run the extractor for `file_name`; unsupported files yield empty lists.
pub fn extract_for(file_name: &str, content: &str) -> Extraction {
    match get_extractor(file_name) {
        Some(extractor) => {
            let extraction = extractor.extract(content);
            tracing::debug!(
                "{} extractor: {} imports, {} exports in {}",
                extractor.name(),
                extraction.imports.len(),
                extraction.exports.len(),
                file_name
            );
            extraction
        }
        None => Extraction::default(),
    }
}

/// Every match of capture group `group`, in text order.
pub(crate) fn capture_all(re: &Regex, content: &str, group: usize) -> Vec<String> {
    re.captures_iter(content)
        .filter_map(|caps| caps.get(group).map(|m| m.as_str().to_string()))
        .collect()
}
