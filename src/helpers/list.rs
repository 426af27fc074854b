//! List helpers: category filtering, slug lookup, tag and category counts

use std::collections::HashMap;

use crate::content::Post;

/// Pseudo-category that selects every post
pub const ALL_CATEGORIES: &str = "all";

/// Category selection for the blog listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (any case) selects everything, any other name one category
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(name.to_string())
        }
    }

    /// Category names match ignoring case and punctuation ("Deep Dives" ~ "deep-dives")
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => {
                post.category.eq_ignore_ascii_case(name)
                    || slug::slugify(&post.category) == slug::slugify(name)
            }
        }
    }
}

/// Posts in the selected category, order preserved
pub fn filter_by_category<'a>(posts: &'a [Post], filter: &CategoryFilter) -> Vec<&'a Post> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

/// Choices for the category filter bar: "all" followed by the configured categories
pub fn category_choices(categories: &[String]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            categories
                .iter()
                .filter(|c| !c.eq_ignore_ascii_case(ALL_CATEGORIES))
                .cloned(),
        )
        .collect()
}

/// Capitalize the first letter: "technical" -> "Technical"
pub fn category_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Find the post addressed by a slug
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

/// Tag usage, most used first, then by name
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    sorted_counts(tags)
}

/// Category usage, most used first, then by name
pub fn category_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut categories: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        *categories.entry(post.category.as_str()).or_insert(0) += 1;
    }
    sorted_counts(categories)
}

fn sorted_counts(counts: HashMap<&str, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<_> = counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
