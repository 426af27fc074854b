//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{FrontMatter, MarkdownRenderer};
use crate::helpers::{parse_date, today};

/// Reading speed used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// A blog post, normalized so that every field is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier derived from the source filename
    pub slug: String,

    pub title: String,

    /// Publication date as written in the source (ISO `YYYY-MM-DD`)
    pub date: String,

    /// Estimated reading time, e.g. `"8 min"`
    pub read_time: String,

    pub excerpt: String,

    pub tags: Vec<String>,

    pub category: String,

    /// Markdown body; absent for built-in posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Post {
    /// Build a post from parsed front-matter and body, filling in defaults
    pub fn from_parts(slug: String, fm: FrontMatter, body: &str, words_per_minute: usize) -> Self {
        let read_time = fm
            .read_time
            .unwrap_or_else(|| reading_time(body, words_per_minute));

        Self {
            slug,
            title: fm.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            date: fm.date.unwrap_or_else(today),
            read_time,
            excerpt: fm.excerpt.unwrap_or_default(),
            tags: fm.tags,
            category: fm.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            content: Some(body.to_string()),
        }
    }

    /// Parse a post from the raw text of `<slug>.md`
    pub fn parse(slug: &str, raw: &str, words_per_minute: usize) -> Self {
        let (fm, body) = FrontMatter::parse(raw);
        Self::from_parts(slug.to_string(), fm, body, words_per_minute)
    }

    /// Parsed publication date, used for ordering
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    /// Render the body to HTML. Built-in posts have no body.
    pub fn render_html(&self, renderer: &MarkdownRenderer) -> Option<String> {
        self.content.as_deref().map(|body| renderer.render(body))
    }

    /// Get the previous (newer) post in a date-sorted list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        pos.checked_sub(1).map(|i| &posts[i])
    }

    /// Get the next (older) post in a date-sorted list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }
}

/// Derive a slug from a file name by stripping the `.md` extension
pub fn slug_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.strip_suffix(".md").unwrap_or(&name).to_string()
}

/// Estimate reading time from word count, rounding up to whole minutes.
///
/// An empty body still counts as one word.
pub fn reading_time(body: &str, words_per_minute: usize) -> String {
    let words = body.split_whitespace().count().max(1);
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    format!("{} min", words.div_ceil(wpm))
}
