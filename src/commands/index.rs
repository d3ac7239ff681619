//! Render a post list wrapped in a page

use anyhow::Result;
use chrono::NaiveDate;
use std::path::Path;

use super::write_output;
use crate::content::{ContentLoader, PageParams};
use crate::Site;

pub fn run(
    site: &Site,
    posts: &Path,
    title: &str,
    date: Option<NaiveDate>,
    output: Option<&Path>,
) -> Result<()> {
    let list = ContentLoader::new().load_posts(&site.source_path(posts))?;
    PageParams::new(title, date, "").validate()?;
    tracing::info!("Rendering index {:?} with {} posts", title, list.posts.len());

    let html = site.renderer()?.render_index(title, date, &list);
    write_output(site, &html, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_index_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("posts.yml"),
            "- url: /first\n  title: First\n- url: /second\n  title: Second\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(
            &site,
            Path::new("posts.yml"),
            "Tutorials",
            NaiveDate::from_ymd_opt(2019, 5, 13),
            Some(Path::new("index.html")),
        )
        .unwrap();

        let html = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(html.contains("<h1>Tutorials</h1>"));
        assert!(html.contains(r#"<div class="date">May 13, 2019</div>"#));
        assert!(html.find(r#"href="/first""#).unwrap() < html.find(r#"href="/second""#).unwrap());
    }

    #[test]
    fn test_empty_title_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("posts.yml"), "[]").unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert!(run(&site, Path::new("posts.yml"), "", None, None).is_err());
    }
}
