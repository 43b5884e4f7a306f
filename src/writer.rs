use crate::models::ListingRecord;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Write all records as one pretty-printed JSON array
pub async fn write_records(path: &Path, records: &[ListingRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(records)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("💾 Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Write each record to `{dir}/{adid}.json`; records without a reference use their position
pub async fn write_record_files(dir: &Path, records: &[ListingRecord]) -> Result<usize> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    for (idx, record) in records.iter().enumerate() {
        let name = record
            .adid
            .as_deref()
            .map(file_stem)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("listing_{}", idx + 1));

        let filename = dir.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&filename, json)
            .await
            .with_context(|| format!("Failed to write {}", filename.display()))?;
    }

    info!("💾 Saved {} individual record files to {}", records.len(), dir.display());
    Ok(records.len())
}

fn file_stem(adid: &str) -> String {
    adid.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
