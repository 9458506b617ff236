//! Python extractor

use super::{capture_all, Extraction, LanguageExtractor};
use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:from\s+(\S+)\s+import|import\s+(\S+))").expect("valid python import pattern")
});

static DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:def|class)\s+([A-Za-z0-9_]+)").expect("valid python def pattern"));

pub struct PythonExtractor;

impl LanguageExtractor for PythonExtractor {
    fn extract(&self, content: &str) -> Extraction {
        let imports = IMPORT
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect();

        Extraction {
            imports,
            exports: capture_all(&DEFINITION, content, 1),
        }
    }

    fn name(&self) -> &'static str {
        "python"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_forms() {
        let src = "import os\nfrom pkg.models import User\nimport numpy as np\n";
        let e = PythonExtractor.extract(src);
        assert_eq!(e.imports, ["os", "pkg.models", "numpy"]);
    }

    #[test]
    fn definitions() {
        let src = "class Repo:\n    def save(self):\n        pass\n\ndef main():\n    pass\n";
        let e = PythonExtractor.extract(src);
        assert_eq!(e.exports, ["Repo", "save", "main"]);
    }
}
