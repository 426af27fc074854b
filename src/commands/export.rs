//! Export posts as JSON for the presentation layer

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::Post;
use crate::Folio;

/// Serialize posts as a JSON array
pub fn to_json(posts: &[Post], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(posts)?
    } else {
        serde_json::to_string(posts)?
    };
    Ok(json)
}

/// Write the loaded posts to `output`, or stdout when not given
pub fn run(folio: &Folio, limit: Option<usize>, pretty: bool, output: Option<&Path>) -> Result<()> {
    let posts = folio.posts(limit);
    let json = to_json(&posts, pretty)?;

    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!("Exported {} posts to {:?}", posts.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let posts_dir = tmp.path().join("_posts");
        fs::create_dir(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("hello.md"),
            "---\ntitle: Hello\ndate: 2024-03-01\ntags: [rust]\n---\nHi there",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        let output = tmp.path().join("posts.json");
        run(&folio, None, true, Some(&output)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let first = &value[0];
        assert_eq!(first["slug"], "hello");
        assert_eq!(first["readTime"], "1 min");
        assert_eq!(first["tags"], serde_json::json!(["rust"]));
        assert_eq!(first["content"], "Hi there");
    }

    #[test]
    fn test_fallback_posts_omit_content() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        let json = to_json(&folio.posts(Some(1)), false).unwrap();
        assert!(json.starts_with(r#"[{"slug":"building-scalable-microservices-with-go","#));
        assert!(!json.contains("\"content\""));
    }
}
