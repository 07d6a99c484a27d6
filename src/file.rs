//! Reading and writing service documents on disk.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::Service;
use crate::xml::XmlCodec;

/// Reads and parses a service document file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not well-formed XML
/// - A workspace or collection is missing a required element or attribute
pub async fn read_service(path: &Path, codec: &impl XmlCodec) -> Result<Service> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read service document: {}", path.display()))?;
    let service = Service::from_xml_str(&content, codec)
        .with_context(|| format!("Failed to parse service document: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        workspaces = service.workspaces().len(),
        "Loaded service document"
    );
    Ok(service)
}

/// Writes a service document to `path` atomically.
///
/// The rendered XML goes to a sibling temp file, is synced, and is then
/// renamed over `path`; readers see either the old or the new document.
pub fn write_service(service: &Service, codec: &impl XmlCodec, path: &Path) -> Result<()> {
    let content = service
        .to_xml_string(codec)
        .context("Failed to render service document")?;

    let temp_path = temp_path_for(path);
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temporary file '{}'", temp_path.display()))?;

    let written = file
        .write_all(content.as_bytes())
        .and_then(|()| file.sync_all())
        .with_context(|| format!("Failed to write '{}'", temp_path.display()));
    drop(file);
    let written = written.and_then(|()| {
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace '{}'", path.display()))
    });
    if written.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    written?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote service document");
    Ok(())
}

/// SEC-009: temp file name with an unpredictable suffix, next to `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    path.with_extension(format!("tmp.{nanos:016x}"))
}
