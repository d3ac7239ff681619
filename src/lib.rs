//! masteringjs-site: page and post-list renderer for the Mastering JS site
//!
//! Rendering is split into two pure string builders:
//!
//! 1. [`templates::render_post_list`] turns an ordered [`PostList`] into an
//!    HTML list fragment.
//! 2. [`templates::PageRenderer`] wraps any content fragment, such as that
//!    list, in the site skeleton with stylesheets, navigation, title and
//!    date line.
//!
//! [`Site`] ties these to an on-disk `_config.yml` for the command-line tool.

pub mod commands;
pub mod config;
pub mod content;
mod error;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{PageParams, Post, PostList};
pub use error::Error;
pub use templates::{render_page, render_post_list, PageRenderer};

/// A site directory and its configuration
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// Build a page renderer for this site
    pub fn renderer(&self) -> Result<PageRenderer> {
        Ok(PageRenderer::new(&self.config)?)
    }

    /// Resolve an input path against the base directory
    pub fn source_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Resolve an output path against the public directory
    pub fn output_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.public_dir.join(path)
        }
    }
}
