//! Render a single page source

use anyhow::Result;
use std::path::Path;

use super::write_output;
use crate::content::ContentLoader;
use crate::Site;

/// Render a page source (markdown or HTML, with optional front-matter) into
/// a full document
pub fn run(site: &Site, source: &Path, output: Option<&Path>) -> Result<()> {
    let source = site.source_path(source);
    let page = ContentLoader::new().load_page(&source)?;
    tracing::info!("Rendering page {:?}", page.title);

    let html = site.renderer()?.render(&page);
    write_output(site, &html, output)
}
