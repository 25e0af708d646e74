use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Load an entire document as UTF-8 text.
///
/// The open/read failure and the decode failure are distinct errors so the
/// caller's diagnostic names the actual problem.
pub async fn load_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    debug!("loading document: {}", path.display());

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| anyhow::anyhow!("input file {} is not valid UTF-8: {}", path.display(), e))?;

    debug!("loaded {} bytes from {}", text.len(), path.display());

    Ok(text)
}
