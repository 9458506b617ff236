//! C / C++ extractor

use super::{capture_all, Extraction, LanguageExtractor};
use once_cell::sync::Lazy;
use regex::Regex;

static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#include\s*[<"]([^>"]+)[>"]"#).expect("valid include pattern"));

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\n)\s*(?:[A-Za-z0-9_]+\s+)*([A-Za-z0-9_]+)\s*\([^)]*\)\s*(?:\{|;)")
        .expect("valid function pattern")
});

/// Control-flow keywords the function pattern also matches.
const NOT_FUNCTIONS: &[&str] = &["if", "for", "while", "switch"];

pub struct CExtractor;

impl LanguageExtractor for CExtractor {
    fn extract(&self, content: &str) -> Extraction {
        let exports = capture_all(&FUNCTION, content, 1)
            .into_iter()
            .filter(|name| !NOT_FUNCTIONS.contains(&name.as_str()))
            .collect();

        Extraction {
            imports: capture_all(&INCLUDE, content, 1),
            exports,
        }
    }

    fn name(&self) -> &'static str {
        "c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes() {
        let src = "#include <stdio.h>\n#include \"util.h\"\n#include<vector>\n";
        let e = CExtractor.extract(src);
        assert_eq!(e.imports, ["stdio.h", "util.h", "vector"]);
    }

    #[test]
    fn functions_without_keywords() {
        let src = "int add(int a, int b);\nstatic void run(void) {\n    if (x) {\n    }\n}\n";
        let e = CExtractor.extract(src);
        assert_eq!(e.exports, ["add", "run"]);
    }
}
