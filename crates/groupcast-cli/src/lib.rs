use std::collections::HashSet;
use std::path::{Component, Path};

use anyhow::{Context, Result};
use groupcast_core::{FileDescriptor, GroupId};

/// Read a local file into a descriptor; the MIME type is guessed from the
/// file name.
pub async fn load_file(path: &Path) -> Result<FileDescriptor> {
    if path.components().any(|c| c == Component::ParentDir) {
        return Err(anyhow::anyhow!("Invalid input: {}", path.display()));
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?
        .to_string();

    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(FileDescriptor::from_bytes(name, content))
}

/// Drop repeated group ids, keeping first occurrences in order.
pub fn unique_groups(ids: &[GroupId]) -> Vec<GroupId> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}


/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
