use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Write a raw API response to `path` as indented UTF-8 JSON.
///
/// Parent directories are created as needed and any existing file is
/// overwritten. Non-ASCII characters are written verbatim, not escaped.
pub fn write_snapshot(value: &Value, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let mut contents = serde_json::to_string_pretty(value).context("serializing response")?;
    contents.push('\n');

    fs::write(path, &contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(target: "snapshot", "wrote {} ({} bytes)", path.display(), contents.len());

    Ok(())
}
