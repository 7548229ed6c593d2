//! Post data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One decoded data row, keyed by lower-cased header name.
pub type RawRecord = BTreeMap<String, String>;

/// Columns mapped onto typed `Post` fields; never copied into `extra`.
pub const RESERVED_COLUMNS: [&str; 6] = ["title", "content", "slug", "category", "tags", "status"];

/// A blog post built from one spreadsheet row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Post title (never blank)
    pub title: String,

    /// Post body, may be empty
    #[serde(default)]
    pub content: String,

    /// URL-safe identifier derived from the title
    pub slug: String,

    /// Category, or the configured default when the sheet leaves it blank
    pub category: String,

    /// Trimmed, non-empty tags in sheet order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Raw status value
    #[serde(default)]
    pub status: String,

    /// Operator-defined columns (author, date, image, ...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Post {
    /// Whether this post is hidden from published listings.
    pub fn is_draft(&self, draft_status: &str) -> bool {
        self.status.trim().eq_ignore_ascii_case(draft_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        let mut extra = BTreeMap::new();
        extra.insert("author".to_string(), "Admin".to_string());

        Post {
            title: "Hello, World".to_string(),
            content: "Some content".to_string(),
            slug: "hello-world".to_string(),
            category: "Tech".to_string(),
            tags: vec!["js".to_string(), "web".to_string()],
            status: "published".to_string(),
            extra,
        }
    }

    #[test]
    fn test_is_draft_ignores_case_and_padding() {
        let mut post = sample_post();
        assert!(!post.is_draft("draft"));

        for status in ["draft", "DRAFT", " draft ", " Draft "] {
            post.status = status.to_string();
            assert!(post.is_draft("draft"), "{status:?} should be a draft");
        }

        post.status = "drafted".to_string();
        assert!(!post.is_draft("draft"));
    }

    #[test]
    fn test_extra_fields_flatten_into_json() {
        let json = serde_json::to_value(sample_post()).unwrap();
        assert_eq!(json["author"], "Admin");
        assert_eq!(json["slug"], "hello-world");
        assert_eq!(json["tags"][1], "web");
        assert!(json.get("extra").is_none());
    }
}
