//! JavaScript / TypeScript extractor (ES modules and CommonJS)

use super::{capture_all, Extraction, LanguageExtractor};
use once_cell::sync::Lazy;
use regex::Regex;

static ES_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"import\s+(?:(?:\{[^}]*\}|\*\s+as\s+[A-Za-z0-9_]+|[A-Za-z0-9_]+)(?:\s*,\s*(?:\{[^}]*\}|\*\s+as\s+[A-Za-z0-9_]+|[A-Za-z0-9_]+))*\s+from\s+)?['"]([^'"]+)['"]"#,
    )
    .expect("valid ES import pattern")
});

static REQUIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid require pattern")
});

static EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:default\s+)?(?:class|function|const|let|var)\s+([A-Za-z0-9_]+)")
        .expect("valid export pattern")
});

pub struct JavaScriptExtractor;

impl LanguageExtractor for JavaScriptExtractor {
    fn extract(&self, content: &str) -> Extraction {
        // ES imports first, then every require() call.
        let mut imports = capture_all(&ES_IMPORT, content, 1);
        imports.extend(capture_all(&REQUIRE, content, 1));

        Extraction {
            imports,
            exports: capture_all(&EXPORT, content, 1),
        }
    }

    fn name(&self) -> &'static str {
        "javascript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_import() {
        let e = JavaScriptExtractor.extract("import x from 'y';");
        assert_eq!(e.imports, ["y"]);
    }

    #[test]
    fn import_forms() {
        let src = r#"
import React, { useState } from "react";
import * as path from 'path';
import { a, b } from './lib/helpers';
import './styles.css';
"#;
        let e = JavaScriptExtractor.extract(src);
        assert_eq!(e.imports, ["react", "path", "./lib/helpers", "./styles.css"]);
    }

    #[test]
    fn requires_follow_es_imports() {
        let src = "const fs = require('fs');\nimport util from './util';\nconst cfg = require ( \"./config\" );";
        let e = JavaScriptExtractor.extract(src);
        assert_eq!(e.imports, ["./util", "fs", "./config"]);
    }

    #[test]
    fn exports() {
        let src = r#"
export const API_BASE_URL = 'https://example.com';
export default function App() {}
export class Store {}
export let counter = 0;
export { hidden };
"#;
        let e = JavaScriptExtractor.extract(src);
        assert_eq!(e.exports, ["API_BASE_URL", "App", "Store", "counter"]);
    }

    #[test]
    fn dynamic_import_is_not_seen() {
        let e = JavaScriptExtractor.extract("const m = await import(name);");
        assert!(e.imports.is_empty());
    }
}
