//! Reads files and folders from disk into [`SourceFile`]s

use crate::error::LoadError;
use crate::source::SourceFile;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};

/// Load every path: files as-is, folders recursively.
///
/// Folder walks honour `.gitignore` and skip hidden entries. A file that
/// cannot be read is still returned, with empty content.
pub async fn load_paths(paths: &[PathBuf]) -> Result<Vec<SourceFile>, LoadError> {
    let mut files = Vec::new();

    for root in paths {
        let metadata = tokio::fs::metadata(root).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(root.clone())
            } else {
                LoadError::Io {
                    path: root.clone(),
                    source,
                }
            }
        })?;

        if metadata.is_dir() {
            for (path, relative) in walk_directory(root) {
                files.push(read_source(&path, relative).await);
            }
        } else {
            let name = file_name(root);
            files.push(read_source(root, name).await);
        }
    }

    debug!("Loaded {} files from {} paths", files.len(), paths.len());
    Ok(files)
}

/// Files under `root` with paths relative to its parent, so the folder name is kept.
fn walk_directory(root: &Path) -> Vec<(PathBuf, String)> {
    let folder = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_else(|| ".".to_string());

    let mut found = Vec::new();
    let walker = WalkBuilder::new(root)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Cannot read entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.into_path();
        let inner = path.strip_prefix(root).unwrap_or(&path);
        let relative = Path::new(&folder)
            .join(inner)
            .to_string_lossy()
            .replace('\\', "/");
        found.push((path, relative));
    }
    found
}

async fn read_source(path: &Path, relative: String) -> SourceFile {
    let name = file_name(path);

    let (size, modified) = match tokio::fs::metadata(path).await {
        Ok(meta) => {
            let modified = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_millis() as u64);
            (meta.len(), modified)
        }
        Err(_) => (0, None),
    };

    let content = match tokio::fs::read(path).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            String::new()
        }
    };

    SourceFile {
        name,
        path: relative,
        content,
        size,
        modified,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
