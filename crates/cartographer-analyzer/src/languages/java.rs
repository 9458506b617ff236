//! Java extractor

use super::{capture_all, Extraction, LanguageExtractor};
use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"import\s+(?:static\s+)?([^;]+);").expect("valid java import pattern"));

static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:public\s+)?class\s+([A-Za-z0-9_]+)").expect("valid java class pattern")
});

pub struct JavaExtractor;

impl LanguageExtractor for JavaExtractor {
    fn extract(&self, content: &str) -> Extraction {
        Extraction {
            imports: capture_all(&IMPORT, content, 1),
            exports: capture_all(&CLASS, content, 1),
        }
    }

    fn name(&self) -> &'static str {
        "java"
    }
}
