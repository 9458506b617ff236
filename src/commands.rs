//! CLI command implementations

use anyhow::Context;
use cartographer_ai::providers::{create_provider, local::LocalProvider};
use cartographer_ai::{AIProvider, SummaryOrigin, Summarizer};
use cartographer_analyzer::{build_graph, load_paths, StagingArea};
use cartographer_core::{dependency_listing, sorted_nodes, FileGraph, ProjectStats, SortKey};
use cartographer_server::{CartographerServer, ServerConfig};
use std::path::PathBuf;

use crate::config::Config;

fn summarizer(config: &Config, offline: bool) -> anyhow::Result<Summarizer> {
    let provider: Box<dyn AIProvider> = if offline {
        Box::new(LocalProvider::new())
    } else {
        create_provider(&config.ai)?
    };
    tracing::info!("Summaries by {}", provider.name());
    Ok(Summarizer::new(provider))
}

/// Load and analyze `paths`, deduplicating repeated inputs.
async fn load_graph(paths: &[PathBuf]) -> anyhow::Result<FileGraph> {
    if paths.is_empty() {
        return Ok(FileGraph::new());
    }

    let mut staging = StagingArea::new();
    staging.stage(load_paths(paths).await?);
    Ok(build_graph(&staging.take()))
}

pub async fn serve(
    config: &Config,
    server: ServerConfig,
    paths: Vec<PathBuf>,
    offline: bool,
) -> anyhow::Result<()> {
    let graph = load_graph(&paths).await?;
    if graph.is_empty() {
        tracing::info!("No files loaded yet, drop some onto the page");
    }

    CartographerServer::new(graph, summarizer(config, offline)?, server)
        .start()
        .await
}

pub async fn analyze(paths: Vec<PathBuf>, json: bool) -> anyhow::Result<()> {
    let graph = load_graph(&paths).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&graph.snapshot())?);
        return Ok(());
    }

    let stats = ProjectStats::compute(&graph);
    println!(
        "{} files, {} dependencies, {} lines, average complexity {}",
        stats.total_files, stats.total_dependencies, stats.total_lines, stats.avg_complexity
    );
    for (kind, count) in &stats.file_types {
        println!("  {:<20} {}", kind, count);
    }

    println!();
    for node in sorted_nodes(&graph, SortKey::Name) {
        let file = &node.file;
        println!(
            "{:<40} {:<18} {:>6} lines  complexity {:>2}",
            file.path,
            file.kind.display_name(),
            file.lines,
            file.complexity
        );
    }

    let deps = dependency_listing(&graph);
    if !deps.is_empty() {
        println!();
        for entry in deps {
            println!("{}", entry);
        }
    }
    Ok(())
}

pub async fn summarize(config: &Config, file: PathBuf, offline: bool) -> anyhow::Result<()> {
    let source = load_paths(std::slice::from_ref(&file))
        .await?
        .into_iter()
        .next()
        .with_context(|| format!("{} is not a readable file", file.display()))?;

    let summary = summarizer(config, offline)?
        .generate_summary(&source.content, &source.name)
        .await;

    if summary.origin == SummaryOrigin::Fallback {
        tracing::warn!("AI summary unavailable, showing basic analysis");
    }
    println!("{}", summary.text);
    Ok(())
}

pub async fn check_ai(config: &Config) -> anyhow::Result<()> {
    let summarizer = summarizer(config, false)?;
    if summarizer.test_connection().await {
        println!("{} is reachable", summarizer.provider_name());
        Ok(())
    } else {
        anyhow::bail!("{} did not answer", summarizer.provider_name())
    }
}
