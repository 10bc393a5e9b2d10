//! Normalized content view model for articles and projects.
//!
//! DESIGN
//! ======
//! The backend returns loosely-shaped records whose field names differ
//! between endpoints and releases (`category` vs `category_name`, `image`
//! vs `image_url`, tags as an array or a comma-separated string). Each
//! field is resolved independently from a list of accepted source keys and
//! falls back to a fixed default, so a record with no fields at all still
//! yields a fully-populated [`ContentItem`]. Normalization is pure.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Sans titre";
pub const DEFAULT_CATEGORY: &str = "Général";
pub const DEFAULT_AUTHOR: &str = "Équipe Medical Consulting";
pub const DEFAULT_READ_TIME: &str = "5 min";
pub const DEFAULT_ARTICLE_IMAGE: &str = "/images/default-article.jpg";
pub const DEFAULT_PROJECT_IMAGE: &str = "/images/default-project.jpg";

/// Which content collection a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Blog article.
    Article,
    /// Service / project showcase entry.
    Project,
}

impl ContentKind {
    /// Prefix of generated slugs (`post-<id>`, `project-<id>`).
    #[must_use]
    pub fn slug_prefix(self) -> &'static str {
        match self {
            Self::Article => "post",
            Self::Project => "project",
        }
    }

    #[must_use]
    pub fn default_image(self) -> &'static str {
        match self {
            Self::Article => DEFAULT_ARTICLE_IMAGE,
            Self::Project => DEFAULT_PROJECT_IMAGE,
        }
    }

    /// Source keys for the publication date, most preferred first.
    fn date_keys(self) -> &'static [&'static str] {
        match self {
            Self::Article => &["published_at", "created_at"],
            Self::Project => &["created_at", "published_at"],
        }
    }
}

/// A normalized article or project, ready for display and filtering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    pub published_at: Option<String>,
    /// Routing key of the detail page; never empty.
    pub slug: String,
    pub tags: Vec<String>,
    #[serde(rename = "readTime")]
    pub read_time: String,
}

/// Normalize one raw backend record.
///
/// `position` is the zero-based index of the record in its list; it stands
/// in for the id when the backend omits one.
#[must_use]
pub fn normalize(kind: ContentKind, raw: &Value, position: usize) -> ContentItem {
    let id = id_field(raw).unwrap_or_else(|| (position + 1).to_string());
    let slug = raw
        .get("slug")
        .and_then(Value::as_str)
        .and_then(non_blank)
        .unwrap_or_else(|| format!("{}-{id}", kind.slug_prefix()));

    ContentItem {
        kind,
        title: text_field(raw, &["title", "name"]).unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        excerpt: text_field(raw, &["excerpt", "summary", "description"]).unwrap_or_default(),
        image_url: text_field(raw, &["image_url", "image", "cover_image", "thumbnail"])
            .unwrap_or_else(|| kind.default_image().to_owned()),
        category: named_field(raw, &["category_name", "category"])
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        author: named_field(raw, &["author_name", "author"]).unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        published_at: text_field(raw, kind.date_keys()),
        slug,
        tags: tags_field(raw),
        read_time: read_time_field(raw).unwrap_or_else(|| DEFAULT_READ_TIME.to_owned()),
        id,
    }
}

/// Normalize a whole list, preserving backend order.
#[must_use]
pub fn normalize_all(kind: ContentKind, raw: &[Value]) -> Vec<ContentItem> {
    raw.iter()
        .enumerate()
        .map(|(position, record)| normalize(kind, record, position))
        .collect()
}

/// Display fields are kept verbatim; only a missing or empty value falls back.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn id_field(raw: &Value) -> Option<String> {
    match raw.get("id")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => non_blank(s),
        _ => None,
    }
}

fn text_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| raw.get(*key).and_then(Value::as_str).and_then(non_empty))
}

/// Like [`text_field`], but also accepts nested `{ "name": ... }` objects.
fn named_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match raw.get(*key)? {
        Value::String(s) => non_empty(s),
        Value::Object(nested) => nested.get("name").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    })
}

fn tags_field(raw: &Value) -> Vec<String> {
    match raw.get("tags") {
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(|tag| match tag {
                Value::String(s) => Some(s.as_str()),
                Value::Object(nested) => nested.get("name").and_then(Value::as_str),
                _ => None,
            })
            .filter_map(non_blank)
            .collect(),
        Some(Value::String(joined)) => joined.split(',').filter_map(non_blank).collect(),
        _ => Vec::new(),
    }
}

fn read_time_field(raw: &Value) -> Option<String> {
    ["readTime", "read_time"].iter().find_map(|key| match raw.get(*key)? {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(format!("{n} min")),
        _ => None,
    })
}
