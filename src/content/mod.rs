//! Content module - handles posts, front-matter and markdown rendering

mod error;
mod fallback;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use error::{ContentError, Result};
pub use fallback::fallback_posts;
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::{
    reading_time, slug_from_path, Post, DEFAULT_CATEGORY, DEFAULT_TITLE, DEFAULT_WORDS_PER_MINUTE,
};
