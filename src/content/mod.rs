//! Content module - render inputs and the loaders that produce them

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{PageParams, Post, PostList};
