//! Errors raised while reading content

use std::path::PathBuf;

/// Content error types
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A post file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The posts directory could not be listed
    #[error("Failed to list {path:?}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// YAML front-matter did not parse
    #[error("Invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON front-matter did not parse
    #[error("Invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    /// Front-matter opened with an unsupported language hint
    #[error("Unsupported front-matter language: {0}")]
    UnsupportedLanguage(String),

    /// No post matches the requested slug
    #[error("No post with slug {0:?}")]
    NotFound(String),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
