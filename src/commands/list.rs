//! List site content

use anyhow::Result;

use crate::helpers::{
    category_choices, category_counts, category_label, display_date, filter_by_category,
    tag_counts, CategoryFilter, ALL_CATEGORIES,
};
use crate::Folio;

/// List site content by type
pub fn run(
    folio: &Folio,
    content_type: &str,
    limit: Option<usize>,
    category: Option<&str>,
) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = folio.posts(limit);
            let filter = category.map(CategoryFilter::parse).unwrap_or_default();
            let selected = filter_by_category(&posts, &filter);

            println!("Posts ({}):", selected.len());
            for post in selected {
                println!(
                    "  {} - {} [{}] {}",
                    display_date(&post.date, &folio.config.date_format),
                    post.title,
                    post.slug,
                    post.read_time
                );
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&folio.posts(limit));
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({}) [{}]", tag, count, slug::slugify(&tag));
            }
        }
        "category" | "categories" => {
            let posts = folio.posts(limit);
            let counts = category_counts(&posts);
            let choices = category_choices(&folio.config.categories);

            println!("Categories ({}):", choices.len());
            for choice in &choices {
                let count = if choice == ALL_CATEGORIES {
                    posts.len()
                } else {
                    count_for(&counts, choice)
                };
                println!("  {} ({})", category_label(choice), count);
            }

            // Categories used by posts but missing from the filter bar
            for (name, count) in &counts {
                if !choices.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                    println!("  {} ({}) *not in filter*", category_label(name), count);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category",
                content_type
            );
        }
    }

    Ok(())
}

fn count_for(counts: &[(String, usize)], category: &str) -> usize {
    counts
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, count)| count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let err = run(&folio, "widgets", None, None).unwrap_err();
        assert!(err.to_string().contains("Unknown type: widgets"));
    }

    #[test]
    fn test_count_for_ignores_case() {
        let counts = vec![("Research".to_string(), 2), ("research".to_string(), 1)];
        assert_eq!(count_for(&counts, "research"), 3);
        assert_eq!(count_for(&counts, "thoughts"), 0);
    }
}
