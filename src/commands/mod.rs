//! CLI commands

pub mod index;
pub mod list;
pub mod page;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::Site;

/// Write rendered HTML to `output` (relative to the public directory), or
/// to stdout when no output is given
pub fn write_output(site: &Site, html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let path = site.output_path(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Wrote {:?} ({} bytes)", path, html.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
