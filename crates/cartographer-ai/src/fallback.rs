//! Deterministic summary used when no AI answer is available

use cartographer_core::{describe_extension, file_extension};
use once_cell::sync::Lazy;
use regex::Regex;

static DEFINITIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"function\s+[A-Za-z0-9_]+|def\s+[A-Za-z0-9_]+|class\s+[A-Za-z0-9_]+")
        .expect("valid definition pattern")
});

static IMPORT_STATEMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"import\s+|from\s+.*import|#include|require\(").expect("valid import pattern")
});

/// Line and pattern counts behind the fallback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicStats {
    pub total_lines: usize,
    pub code_lines: usize,
    pub definitions: usize,
    pub imports: usize,
}

impl BasicStats {
    pub fn of(code: &str) -> Self {
        let lines: Vec<&str> = code.split('\n').collect();
        BasicStats {
            total_lines: lines.len(),
            code_lines: lines.iter().filter(|l| !l.trim().is_empty()).count(),
            definitions: DEFINITIONS.find_iter(code).count(),
            imports: IMPORT_STATEMENTS.find_iter(code).count(),
        }
    }
}

/// Templated summary built from [`BasicStats`].
pub fn basic_summary(code: &str, file_name: &str) -> String {
    let stats = BasicStats::of(code);
    let file_type = describe_extension(&file_extension(file_name));

    [
        format!("• File Type: {}", file_type),
        format!(
            "• Lines of Code: {} ({} total)",
            stats.code_lines, stats.total_lines
        ),
        format!("• Functions/Classes: {} definitions found", stats.definitions),
        format!("• Dependencies: {} import statements", stats.imports),
        "• Basic analysis completed (AI summary unavailable)".to_string(),
    ]
    .join("\n")
}
