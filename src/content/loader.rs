//! Content loader - loads posts from the posts directory

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::post::slug_from_path;
use super::{fallback_posts, Post};
use crate::Folio;

/// Loads posts from a directory of markdown files
#[derive(Debug, Clone)]
pub struct ContentLoader {
    posts_dir: PathBuf,
    words_per_minute: usize,
}

impl ContentLoader {
    /// Create a loader for the site's posts directory
    pub fn new(folio: &Folio) -> Self {
        Self::with_dir(&folio.posts_dir, folio.config.words_per_minute)
    }

    /// Create a loader for an arbitrary directory
    pub fn with_dir<P: AsRef<Path>>(posts_dir: P, words_per_minute: usize) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
            words_per_minute,
        }
    }

    /// Load all posts, newest first, keeping at most `limit`.
    ///
    /// Falls back to the built-in posts when the directory is missing or
    /// unreadable, or when it yields no post. Never fails.
    pub fn load_posts(&self, limit: Option<usize>) -> Vec<Post> {
        if !self.posts_dir.exists() {
            tracing::info!("{:?} not found, using built-in posts", self.posts_dir);
            return fallback_posts(limit);
        }

        let files = match self.markdown_files() {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("{}, using built-in posts", e);
                return fallback_posts(limit);
            }
        };

        if files.is_empty() {
            tracing::info!(
                "No markdown files in {:?}, using built-in posts",
                self.posts_dir
            );
            return fallback_posts(limit);
        }

        let mut posts = Vec::with_capacity(files.len());
        for path in &files {
            match self.load_post(path) {
                Ok(post) => posts.push(post),
                Err(e) => tracing::warn!("Skipping post: {}", e),
            }
        }

        if posts.is_empty() {
            tracing::warn!(
                "None of the {} markdown files in {:?} could be read, using built-in posts",
                files.len(),
                self.posts_dir
            );
            return fallback_posts(limit);
        }

        // Stable sort: posts with equal dates stay in file name order,
        // posts with unparsable dates go last
        posts.sort_by_cached_key(|p| Reverse(p.published_at()));

        if let Some(limit) = limit {
            posts.truncate(limit);
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        posts
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Post::parse(&slug_from_path(path), &raw, self.words_per_minute))
    }

    /// Load the post addressed by `slug`, built-in posts included
    pub fn find(&self, slug: &str) -> Result<Post> {
        self.load_posts(None)
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))
    }

    /// Markdown files directly inside the posts directory, sorted by name
    fn markdown_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The directory itself could not be listed
                Err(e) if e.depth() == 0 => {
                    return Err(ContentError::List {
                        path: self.posts_dir.clone(),
                        source: e,
                    })
                }
                Err(e) => {
                    tracing::warn!("Skipping entry in {:?}: {}", self.posts_dir, e);
                    continue;
                }
            };

            if entry.file_type().is_file() && is_markdown_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!(
            "Found {} markdown files in {:?}",
            files.len(),
            self.posts_dir
        );
        Ok(files)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(".md"))
        .unwrap_or(false)
}
