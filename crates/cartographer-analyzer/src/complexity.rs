//! Keyword-count complexity heuristic

use cartographer_core::MAX_COMPLEXITY;
use once_cell::sync::Lazy;
use regex::Regex;

/// Control-flow and declaration patterns; each occurrence adds one point.
static SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"if\s*\(",
        r"for\s*\(",
        r"while\s*\(",
        r"switch\s*\(",
        r"catch\s*\(",
        r"function\s+[A-Za-z0-9_]+",
        r"class\s+[A-Za-z0-9_]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid complexity pattern"))
    .collect()
});

/// Count keyword occurrences in `content`, capped at [`MAX_COMPLEXITY`].
///
/// This is a display hint, not cyclomatic complexity.
pub fn complexity_score(content: &str) -> u8 {
    let cap = usize::from(MAX_COMPLEXITY);
    let mut total = 0usize;
    for re in SIGNALS.iter() {
        total += re.find_iter(content).count();
        if total >= cap {
            return MAX_COMPLEXITY;
        }
    }
    total as u8
}
