//! Unit tests for cartographer-analyzer

use crate::*;
use cartographer_core::{FileKind, MatchStrategy, MAX_COMPLEXITY};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_extractor_detection() {
    let test_cases = vec![
        ("index.js", Some("javascript")),
        ("App.tsx", Some("javascript")),
        ("main.py", Some("python")),
        ("Main.java", Some("java")),
        ("main.c", Some("c")),
        ("engine.cpp", Some("c")),
        ("engine.h", Some("c")),
        ("lib.rs", None),
        ("notes.txt", None),
    ];

    for (filename, expected) in test_cases {
        let name = get_extractor(filename).map(|e| e.name());
        assert_eq!(name, expected, "extractor for {}", filename);
    }
}

#[test]
fn test_unsupported_extension_yields_empty_lists() {
    let extraction = extract_for("main.go", "import \"fmt\"\nfunc main() {}");
    assert_eq!(extraction, Extraction::default());
}

#[test]
fn test_identifiers_stop_at_non_ascii() {
    let code = "def café():\n    pass\nfunction ñame() {}\nclass Ärger:\n    pass\n";
    assert_eq!(extract_for("m.py", code).exports, ["caf"]);
    assert_eq!(complexity_score(code), 0);

    let js = extract_for("m.js", "export const naïve = 1;\nexport function ñame() {}");
    assert_eq!(js.exports, ["na"]);
}

#[test]
fn test_analyze_file() {
    let file = SourceFile::new(
        "store.js",
        "import api from './api';\n\nexport function load() {\n  if (ready) {}\n}\n",
    );
    let record = analyze_file(&file);

    assert_eq!(record.kind, FileKind::JavaScript);
    assert_eq!(record.lines, 6);
    assert_eq!(record.imports, ["./api"]);
    assert_eq!(record.exports, ["load"]);
    assert_eq!(record.complexity, 2);
    assert_eq!(record.size, file.content.len() as u64);
    assert!(record.summary.is_none());
}

#[test]
fn test_edge_to_literal_file_name() {
    let files = vec![
        SourceFile::new("A.js", "import b from 'B.js';"),
        SourceFile::new("B.js", "export const b = 1;"),
    ];
    let graph = build_graph(&files);

    let a = graph.find_node_by_name("A.js").unwrap();
    let b = graph.find_node_by_name("B.js").unwrap();
    assert!(graph.has_edge_between(a, b));
    let edge = graph.edges_from(a).next().unwrap();
    assert_eq!(edge.strategy, MatchStrategy::Exact);
    assert_eq!(edge.import, "B.js");
}

#[test]
fn test_no_edge_without_match() {
    let files = vec![
        SourceFile::new("app.js", "import React from 'react';\nconst _ = require('lodash');"),
        SourceFile::new("store.js", "export const store = {};"),
    ];
    let graph = build_graph(&files);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_demo_project_graph() {
    let files = vec![
        SourceFile::new(
            "UserComponent.jsx",
            "import React, { useState } from 'react';\nimport { fetchData, formatDate } from './utils.js';\nimport { APP_CONFIG } from './config.js';\n",
        ),
        SourceFile::new("utils.js", "import { API_BASE_URL } from './config.js';\nexport const fetchData = 1;"),
        SourceFile::new("config.js", "export const API_BASE_URL = 'x';\nexport const APP_CONFIG = {};"),
    ];
    let graph = build_graph(&files);

    let component = graph.find_node_by_name("UserComponent.jsx").unwrap();
    let utils = graph.find_node_by_name("utils.js").unwrap();
    let config = graph.find_node_by_name("config.js").unwrap();

    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge_between(component, utils));
    assert!(graph.has_edge_between(component, config));
    assert!(graph.has_edge_between(utils, config));
    assert!(graph.all_edges().all(|e| e.strategy == MatchStrategy::Substring));
}

#[test]
fn test_extension_appended_match() {
    let files = vec![
        SourceFile::new("main.py", "from models import User"),
        SourceFile::new("models.py", "class User: pass"),
    ];
    let graph = build_graph(&files);
    let edge = graph.all_edges().next().unwrap();
    assert_eq!(edge.strategy, MatchStrategy::Extension);
}

#[test]
fn test_duplicate_imports_make_one_edge() {
    let files = vec![
        SourceFile::new("a.js", "import x from './b';\nconst y = require('./b');"),
        SourceFile::new("b.js", ""),
    ];
    let graph = build_graph(&files);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_no_self_edges() {
    let files = vec![SourceFile::new("utils.js", "import x from './utils/format';")];
    let graph = build_graph(&files);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_reference_existing_nodes() {
    let files = vec![
        SourceFile::new("main.c", "#include \"util.h\"\n#include <stdio.h>\nint main(void) { return 0; }"),
        SourceFile::new("util.h", "int helper(int x);"),
        SourceFile::new("util.c", "#include \"util.h\"\nint helper(int x) { return x; }"),
    ];
    let graph = build_graph(&files);
    for edge in graph.all_edges() {
        assert!(graph.node(edge.source).is_some());
        assert!(graph.node(edge.target).is_some());
    }
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_complexity_is_clamped_in_records() {
    let body = "if (a) {}\n".repeat(500);
    let record = analyze_file(&SourceFile::new("big.js", body));
    assert_eq!(record.complexity, MAX_COMPLEXITY);
}

#[test]
fn test_layout_rows() {
    let files: Vec<_> = (0..8)
        .map(|i| SourceFile::new(format!("f{i}.js"), ""))
        .collect();
    let graph = build_graph(&files);
    let nodes: Vec<_> = graph.all_nodes().collect();
    assert!(nodes[5].position.y < 180.0);
    assert!(nodes[6].position.y >= 180.0);
}

#[test]
fn test_staging_deduplicates() {
    let mut staging = StagingArea::new();
    let a = SourceFile::new("a.js", "1");
    let b = SourceFile::new("b.js", "22");

    assert_eq!(staging.stage(vec![a.clone(), b.clone()]), 2);
    assert_eq!(staging.stage(vec![a.clone()]), 0);
    assert_eq!(staging.len(), 2);

    let removed = staging.remove(0).unwrap();
    assert_eq!(removed.name, "a.js");
    assert!(staging.remove(5).is_none());
    assert_eq!(staging.stage(vec![a]), 1);

    let taken = staging.take();
    assert_eq!(taken.len(), 2);
    assert!(staging.is_empty());
    assert_eq!(staging.stage(vec![b]), 1);
    staging.clear();
    assert!(staging.is_empty());
}

#[test]
fn test_same_name_different_path_is_staged() {
    let mut staging = StagingArea::new();
    let mut first = SourceFile::new("index.js", "x");
    first.path = "web/index.js".to_string();
    let mut second = SourceFile::new("index.js", "x");
    second.path = "api/index.js".to_string();
    assert_eq!(staging.stage(vec![first, second]), 2);
}

#[tokio::test]
async fn test_load_folder() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join(".hidden")).unwrap();
    fs::write(root.join("src/app.js"), "import x from './util';").unwrap();
    fs::write(root.join("src/util.js"), "export const x = 1;").unwrap();
    fs::write(root.join(".hidden/secret.js"), "nope").unwrap();

    let files = load_paths(&[root.clone()]).await.unwrap();
    let mut paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
    paths.sort();

    assert_eq!(paths, ["project/src/app.js", "project/src/util.js"]);
    let app = files.iter().find(|f| f.name == "app.js").unwrap();
    assert_eq!(app.content, "import x from './util';");
    assert_eq!(app.size, app.content.len() as u64);
    assert!(app.modified.is_some());
}

#[tokio::test]
async fn test_load_single_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("main.py");
    fs::write(&path, "import os\n").unwrap();

    let files = load_paths(&[path]).await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "main.py");
    assert_eq!(files[0].path, "main.py");
}

#[tokio::test]
async fn test_load_invalid_utf8_is_lossy() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blob.c");
    fs::write(&path, [0x23, 0xff, 0xfe, 0x0a]).unwrap();

    let files = load_paths(&[path]).await.unwrap();
    assert!(files[0].content.starts_with('#'));
}

#[tokio::test]
async fn test_load_missing_path() {
    let err = load_paths(&[PathBuf::from("/definitely/not/here.js")])
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}
