//! Show a single post

use anyhow::Result;

use crate::content::{ContentError, Post};
use crate::helpers::{category_label, display_date, find_by_slug};
use crate::Folio;

/// Print a post's metadata followed by its rendered body
pub fn run(folio: &Folio, slug: &str, raw: bool) -> Result<()> {
    let posts = folio.posts(None);
    let post =
        find_by_slug(&posts, slug).ok_or_else(|| ContentError::NotFound(slug.to_string()))?;

    print!("{}", header(folio, post));

    match &post.content {
        None => println!("(built-in post, no body available)"),
        Some(body) if raw => println!("{}", body),
        Some(_) => {
            let html = post.render_html(&folio.renderer()).unwrap_or_default();
            println!("{}", html);
        }
    }

    if let Some(newer) = post.prev(&posts) {
        println!("Newer: {} [{}]", newer.title, newer.slug);
    }
    if let Some(older) = post.next(&posts) {
        println!("Older: {} [{}]", older.title, older.slug);
    }

    Ok(())
}

/// Title, date line, excerpt and tags
fn header(folio: &Folio, post: &Post) -> String {
    let mut out = format!(
        "{}\n{} | {} | {}\n",
        post.title,
        display_date(&post.date, &folio.config.date_format),
        post.read_time,
        category_label(&post.category)
    );
    if !post.excerpt.is_empty() {
        out.push_str(&format!("\n{}\n", post.excerpt));
    }
    if !post.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", post.tags.join(", ")));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback_posts;

    #[test]
    fn test_header() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let post = &fallback_posts(Some(1))[0];

        let header = header(&folio, post);
        assert!(header.starts_with("Building Scalable Microservices with Go\n"));
        assert!(header.contains("January 15, 2024 | 8 min | Technical"));
        assert!(header.contains("Tags: Go, Microservices, Architecture"));
    }

    #[test]
    fn test_unknown_slug() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let err = run(&folio, "missing", false).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
