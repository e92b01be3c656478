use std::fs;
use std::path::Path;

use anyhow::Context;
use jmforms_core::{ConvertError, ReadingGroup};

/// Pretty JSON with two-space indentation; non-ASCII is written as-is
pub fn render_json(groups: &[ReadingGroup]) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(groups)?)
}

/// Write the same rendered content to every path. Parent directories must exist.
pub fn write_outputs(paths: &[&Path], content: &str) -> anyhow::Result<()> {
    for path in paths {
        fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("Wrote {} bytes to {}", content.len(), path.display());
    }
    Ok(())
}
