//! Integration tests for Cartographer
//!
//! These tests drive the binary and the library crates together.

use cartographer_ai::{AiConfig, Summarizer, SummaryOrigin};
use cartographer_analyzer::{build_graph, load_paths};
use cartographer_core::{MatchStrategy, ProjectStats};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cartographer(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cartographer"));
    cmd.current_dir(dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("VITE_GEMINI_API_KEY");
    cmd
}

/// A small React project like the one in the demo files.
fn demo_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("UserComponent.jsx"),
        "import React, { useState } from 'react';\n\
         import { fetchData } from './utils.js';\n\
         import { APP_CONFIG } from './config.js';\n\
         export default function UserComponent() {\n  if (!APP_CONFIG) return null;\n}\n",
    )
    .unwrap();
    fs::write(
        root.join("utils.js"),
        "import { API_BASE_URL } from './config.js';\nexport async function fetchData() {\n  try { } catch (e) { }\n}\n",
    )
    .unwrap();
    fs::write(root.join("config.js"), "export const API_BASE_URL = '/api';\nexport const APP_CONFIG = {};\n").unwrap();
    fs::write(root.join("models.py"), "class User:\n    pass\n").unwrap();
    temp
}

#[test]
fn test_cli_help() {
    let temp = TempDir::new().unwrap();
    let output = cartographer(temp.path()).arg("--help").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Interactive dependency map of a codebase"));
    assert!(stdout.contains("analyze"));
}

#[test]
fn test_cli_analyze_json() {
    let temp = demo_project();
    let output = cartographer(temp.path())
        .args(["analyze", "demo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(snapshot["edges"].as_array().unwrap().len(), 3);
    assert!(snapshot["generated_at"].is_string());
}

#[test]
fn test_cli_analyze_text() {
    let temp = demo_project();
    let output = cartographer(temp.path()).args(["analyze", "demo"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("4 files, 3 dependencies"));
    assert!(stdout.contains("utils.js → config.js"));
}

#[test]
fn test_cli_summarize_offline() {
    let temp = demo_project();
    let output = cartographer(temp.path())
        .args(["summarize", "demo/models.py", "--offline"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("• File Type: Python script"));
    assert!(stdout.contains("• Functions/Classes: 1 definitions found"));
}

#[test]
fn test_cli_rejects_bad_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cartographer.toml"), "[ai]\nprovider = [").unwrap();
    let output = cartographer(temp.path()).arg("version").output().unwrap();
    assert!(!output.status.success());
}

#[tokio::test]
async fn test_folder_to_graph() {
    let temp = demo_project();
    let files = load_paths(&[temp.path().join("demo")]).await.unwrap();
    let graph = build_graph(&files);

    let stats = ProjectStats::compute(&graph);
    assert_eq!(stats.total_files, 4);
    assert_eq!(stats.total_dependencies, 3);
    assert_eq!(stats.file_types.get("React"), Some(&1));
    assert!(graph.all_edges().all(|e| e.strategy == MatchStrategy::Substring));

    let models = graph.find_node_by_name("models.py").unwrap();
    assert_eq!(graph.edges_to(models).count(), 0);
    assert_eq!(graph.edges_from(models).count(), 0);
}

#[test]
fn test_unreachable_provider_falls_back() {
    let config = AiConfig {
        api_key: Some("test-key".to_string()),
        endpoint: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..AiConfig::default()
    };
    let provider = cartographer_ai::providers::create_provider(&config).unwrap();
    let summarizer = Summarizer::new(provider);

    let summary = tokio_test::block_on(summarizer.generate_summary("#include <stdio.h>\nint main() {}", "main.c"));
    assert_eq!(summary.origin, SummaryOrigin::Fallback);
    assert!(summary.text.starts_with("• File Type: C source file"));
    assert!(summary.text.contains("• Dependencies: 1 import statements"));
}

#[tokio::test]
async fn test_server_state() {
    use cartographer_ai::providers::local::LocalProvider;
    use cartographer_server::{CartographerServer, ServerConfig};

    let temp = demo_project();
    let files = load_paths(&[temp.path().join("demo")]).await.unwrap();
    let server = CartographerServer::new(
        build_graph(&files),
        Summarizer::new(Box::new(LocalProvider::new())),
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
    );
    assert_eq!(server.state().graph.read().await.node_count(), 4);
}
