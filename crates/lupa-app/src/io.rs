//! Input loading: the icon asset directory and the dictionary source.

use std::path::Path;

use anyhow::{Context, bail};
use lupa_dictionary::WordEntry;

/// Lists the icon names in a directory of svg assets: one name per
/// file, extension stripped, sorted so the pipeline is deterministic.
pub async fn load_icons(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("listing icons in {}", dir.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("listing icons in {}", dir.display()))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_owned());
        }
    }

    if names.is_empty() {
        bail!("no icon assets found in {}", dir.display());
    }
    names.sort();
    names.dedup();
    tracing::info!("found {} icons in {}", names.len(), dir.display());
    Ok(names)
}

/// Reads and parses the dictionary source document.
pub async fn load_dictionary(path: &Path) -> anyhow::Result<Vec<WordEntry>> {
    let xml = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading dictionary {}", path.display()))?;
    let entries = lupa_dictionary::parse_entries(&xml)
        .with_context(|| format!("parsing dictionary {}", path.display()))?;
    tracing::info!("parsed {} dictionary entries from {}", entries.len(), path.display());
    Ok(entries)
}
