//! folio: blog content for a personal portfolio site
//!
//! Loads markdown posts with front-matter from a directory, normalizes them
//! into [`content::Post`] records sorted newest first, and renders their
//! bodies to HTML. When there is no content on disk a built-in list of posts
//! is returned instead, so callers always have something to show.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, MarkdownRenderer, Post};

/// Name of the optional site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The site: configuration plus resolved directories
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the markdown posts
    pub posts_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);

        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// Load posts newest first, keeping at most `limit`
    pub fn posts(&self, limit: Option<usize>) -> Vec<Post> {
        ContentLoader::new(self).load_posts(limit)
    }

    /// Markdown renderer configured for this site
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::from_config(&self.config.highlight)
    }
}

/// Load posts from `_posts` under the current working directory.
///
/// Uses the built-in posts whenever nothing can be loaded.
pub fn load_posts(limit: Option<usize>) -> Vec<Post> {
    match std::env::current_dir() {
        Ok(cwd) => Folio::with_config(cwd, config::SiteConfig::default()).posts(limit),
        Err(e) => {
            tracing::warn!("Cannot resolve working directory: {}", e);
            content::fallback_posts(limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.posts_dir, tmp.path().join("_posts"));
        assert_eq!(folio.posts(None).len(), 4);
    }

    #[test]
    fn test_new_reads_config() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "posts_dir: writing\nwords_per_minute: 100\n",
        )
        .unwrap();
        let writing = tmp.path().join("writing");
        fs::create_dir(&writing).unwrap();
        fs::write(writing.join("short.md"), vec!["w"; 150].join(" ")).unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.posts_dir, writing);

        let posts = folio.posts(None);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].read_time, "2 min");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "words_per_minute: fast\n").unwrap();
        assert!(Folio::new(tmp.path()).is_err());
    }
}
