//! Render a post list fragment

use anyhow::Result;
use std::path::Path;

use super::write_output;
use crate::content::ContentLoader;
use crate::Site;

pub fn run(site: &Site, posts: &Path, output: Option<&Path>) -> Result<()> {
    let list = ContentLoader::new().load_posts(&site.source_path(posts))?;
    tracing::info!("Rendering {} posts", list.posts.len());

    let html = site.renderer()?.render_post_list(&list);
    write_output(site, &html, output)
}
