//! Content loader - reads post lists and page sources from disk

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::{FrontMatter, MarkdownRenderer, PageParams, PostList};

/// Loads render inputs from files
pub struct ContentLoader {
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new() -> Self {
        Self {
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load and validate a post list from a YAML or JSON file
    pub fn load_posts(&self, path: &Path) -> Result<PostList> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read post list {:?}", path))?;

        let list: PostList = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {:?}", path))?,
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse {:?}", path))?,
            _ => bail!(
                "Unsupported post list format: {:?} (expected .json, .yml or .yaml)",
                path
            ),
        };

        list.validate()
            .with_context(|| format!("Invalid post list {:?}", path))?;
        tracing::debug!("Loaded {} posts from {:?}", list.posts.len(), path);

        Ok(list)
    }

    /// Load a page source: front-matter plus a markdown or HTML body
    pub fn load_page(&self, path: &Path) -> Result<PageParams> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&source)?;

        let date = match fm.date.as_deref() {
            Some(raw) => {
                let date = fm.parse_date();
                if date.is_none() {
                    tracing::warn!("Unrecognized date {:?} in {:?}, leaving it blank", raw, path);
                }
                date
            }
            None => None,
        };

        // Fall back to the filename when front-matter has no title
        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string()
        });

        let content = if is_markdown_file(path) {
            self.renderer.render(body)
        } else {
            body.to_string()
        };

        let page = PageParams::new(title, date, content);
        page.validate()
            .with_context(|| format!("Invalid page {:?}", path))?;
        tracing::debug!("Loaded page {:?} from {:?}", page.title, path);

        Ok(page)
    }
}

impl Default for ContentLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("md") | Some("markdown"))
}
