//! Front-matter parsing

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::BTreeMap;

use super::error::{ContentError, Result};

/// Opening and closing delimiter of a front-matter block
const DELIMITER: &str = "---";

/// UTF-8 byte-order mark some editors write at the start of a file
const BOM: char = '\u{feff}';

/// Front-matter data from a post
///
/// Fields hold `None` (or an empty list) when the source omits them or gives
/// a value that counts as absent: an empty string, `null`, `false` or zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(rename = "readTime", deserialize_with = "lenient_string")]
    pub read_time: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub excerpt: Option<String>,
    /// Only a sequence yields tags; any other value is dropped
    #[serde(deserialize_with = "sequence_or_empty")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Accept any scalar and keep its string form
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(present_scalar))
}

/// Keep the scalar items of a sequence, anything else becomes an empty list
fn sequence_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar).collect(),
        _ => Vec::new(),
    })
}

/// String form of a scalar value
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// String form of a scalar value that counts as present
fn present_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()) => None,
        Value::Bool(false) => None,
        Value::Tagged(tagged) => present_scalar(&tagged.value),
        other => scalar(other),
    }
}

impl FrontMatter {
    /// Split raw text into front-matter and body.
    ///
    /// Never fails: front-matter that does not parse is logged and ignored,
    /// in which case the whole text is returned as the body.
    pub fn parse(content: &str) -> (Self, &str) {
        match Self::try_parse(content) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Ignoring front-matter: {}", e);
                (FrontMatter::default(), strip_bom(content))
            }
        }
    }

    /// Split raw text into front-matter and body, reporting parse errors
    pub fn try_parse(content: &str) -> Result<(Self, &str)> {
        let content = strip_bom(content);
        let Some(rest) = content.trim_start().strip_prefix(DELIMITER) else {
            return Ok((FrontMatter::default(), content));
        };

        // `---` may carry a language hint on the same line, e.g. `---json`
        let (opening, after_opening) = split_first_line(rest);
        let language = opening.trim();
        if language.starts_with('-') {
            // `----` and longer are horizontal rules
            return Ok((FrontMatter::default(), content));
        }

        let Some((block, body)) = split_at_closing(after_opening) else {
            return Ok((FrontMatter::default(), content));
        };

        if block.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        match language {
            "" | "yaml" | "yml" => {
                if !has_yaml_structure(block) {
                    // Markdown using `---` as a separator, not front-matter
                    return Ok((FrontMatter::default(), content));
                }
                let fm = serde_yaml::from_str::<FrontMatter>(block)?;
                Ok((fm, body))
            }
            "json" => {
                let fm = serde_json::from_str::<FrontMatter>(block)?;
                Ok((fm, body))
            }
            other => Err(ContentError::UnsupportedLanguage(other.to_string())),
        }
    }
}

fn strip_bom(s: &str) -> &str {
    s.strip_prefix(BOM).unwrap_or(s)
}

fn split_first_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    }
}

/// Find the closing delimiter line; returns (block, body after that line)
fn split_at_closing(s: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if line.starts_with(DELIMITER) {
            return Some((&s[..offset], &s[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Whether a block has at least one `key: value` line
fn has_yaml_structure(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}
