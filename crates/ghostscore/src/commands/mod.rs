//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod detect;
pub mod info;
pub mod quality;
pub mod rewrite;
pub mod semantic;

/// Read analysis input from a file, or stdin when the path is omitted or `-`.
///
/// File reads are preflighted against the configured size limit via metadata
/// so an oversized file never lands in memory; stdin is capped after the read.
pub fn read_input(file: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let Some(path) = file.filter(|p| p.as_str() != "-") else {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read from stdin")?;
        if let Some(max) = max_bytes
            && content.len() > max
        {
            anyhow::bail!(
                "input too large: stdin is {} bytes (limit: {max} bytes)",
                content.len()
            );
        }
        return Ok(content);
    };

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}
