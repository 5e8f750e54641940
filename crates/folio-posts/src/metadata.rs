//! Post metadata parsed from YAML frontmatter.
//!
//! Every field is optional in the frontmatter. Missing or empty values fall
//! back to defaults: title `"Untitled"`, author `"Unknown"`, an empty date and
//! no tags. Scalar values of any type are accepted and stringified, so
//! `title: 2024` is the title `"2024"`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::PostError;

/// Title used when the frontmatter has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Author used when the frontmatter has none.
pub const DEFAULT_AUTHOR: &str = "Unknown";

/// Leading `YYYY-MM-DD`, optionally followed by a time part.
static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:$|[T ])").unwrap());

/// Resolved post metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetadata {
    pub title: String,
    pub author: String,
    /// Display date, e.g. `"January 15, 2024"`. Empty when not set.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Excerpt given explicitly in the frontmatter.
    ///
    /// Not serialized: the post's resolved excerpt is exposed instead.
    #[serde(skip)]
    pub excerpt: Option<String>,
}

impl Default for PostMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            author: DEFAULT_AUTHOR.to_owned(),
            date: String::new(),
            category: None,
            tags: Vec::new(),
            excerpt: None,
        }
    }
}

/// Frontmatter fields as written by the author.
#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    author: Option<Value>,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    category: Option<Value>,
    #[serde(default)]
    tags: Option<Value>,
    #[serde(default)]
    excerpt: Option<Value>,
}

impl PostMetadata {
    /// Parse metadata from frontmatter YAML.
    ///
    /// Empty YAML yields the defaults. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PostError::Frontmatter`] if the YAML is malformed or is not
    /// a mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self, PostError> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_yaml::from_str(trimmed)
            .map_err(|e| PostError::Frontmatter(format!("Invalid YAML: {e}")))?;
        if value.is_null() {
            return Ok(Self::default());
        }
        if !value.is_mapping() {
            return Err(PostError::Frontmatter(
                "Frontmatter must be a mapping".to_owned(),
            ));
        }
        let raw: RawMetadata = serde_yaml::from_value(value)
            .map_err(|e| PostError::Frontmatter(format!("Invalid YAML: {e}")))?;

        Ok(Self {
            title: scalar(raw.title).unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            author: scalar(raw.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
            date: scalar(raw.date)
                .map(|date| format_date(&date))
                .unwrap_or_default(),
            category: scalar(raw.category),
            tags: raw.tags.map(tag_list).unwrap_or_default(),
            excerpt: scalar(raw.excerpt),
        })
    }
}

/// Format a `YYYY-MM-DD` date as `"January 15, 2024"`.
///
/// Values that are not such a date are returned unchanged.
///
/// ```
/// use folio_posts::format_date;
///
/// assert_eq!(format_date("2024-01-15"), "January 15, 2024");
/// assert_eq!(format_date("Spring 2024"), "Spring 2024");
/// ```
#[must_use]
pub fn format_date(value: &str) -> String {
    ISO_DATE_RE
        .captures(value)
        .and_then(|caps| NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok())
        .map_or_else(
            || value.to_owned(),
            |date| date.format("%B %-d, %Y").to_string(),
        )
}

/// Stringify a scalar YAML value. Null, empty strings and collections are `None`.
fn scalar(value: Option<Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Tagged(tagged) => return scalar(Some(tagged.value)),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Tags may be a list or a single scalar.
fn tag_list(value: Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.into_iter().filter_map(|v| scalar(Some(v))).collect(),
        other => scalar(Some(other)).into_iter().collect(),
    }
}
