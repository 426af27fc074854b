//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::DEFAULT_WORDS_PER_MINUTE;
use crate::helpers::DISPLAY_FORMAT;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // Content
    /// Directory holding the markdown posts, relative to the base directory
    pub posts_dir: String,
    pub words_per_minute: usize,

    // Display
    /// chrono format string for post dates
    pub date_format: String,
    /// Categories offered by the blog filter, besides "all"
    pub categories: Vec<String>,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: String::new(),

            posts_dir: "_posts".to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,

            date_format: DISPLAY_FORMAT.to_string(),
            categories: vec![
                "technical".to_string(),
                "research".to_string(),
                "thoughts".to_string(),
            ],
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        if config.words_per_minute == 0 {
            tracing::warn!(
                "words_per_minute must be positive, using {}",
                DEFAULT_WORDS_PER_MINUTE
            );
            config.words_per_minute = DEFAULT_WORDS_PER_MINUTE;
        }
        Ok(config)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme name
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "_posts");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.categories, vec!["technical", "research", "thoughts"]);
        assert!(!config.highlight.line_number);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Portfolio
author: Test User
posts_dir: content/posts
highlight:
  line_number: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Portfolio");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.words_per_minute, 200);
        assert!(config.highlight.line_number);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
    }

    #[test]
    fn test_load_rejects_zero_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "words_per_minute: 0\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.words_per_minute, 200);
    }
}
