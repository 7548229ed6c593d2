// src/services/normalizer.rs

//! Maps decoded records onto `Post` values.

use crate::models::{Post, PostsConfig, RESERVED_COLUMNS, RawRecord};
use crate::utils::slug::slugify;
use crate::utils::split_list;

/// Builds posts from raw records and applies visibility rules.
#[derive(Debug, Clone)]
pub struct PostNormalizer {
    default_category: String,
    draft_status: String,
}

impl Default for PostNormalizer {
    fn default() -> Self {
        Self::new(&PostsConfig::default())
    }
}

impl PostNormalizer {
    /// Create a normalizer from post mapping rules.
    pub fn new(config: &PostsConfig) -> Self {
        Self {
            default_category: config.default_category.clone(),
            draft_status: config.draft_status.clone(),
        }
    }

    /// Convert every record with a non-blank title. Drafts are kept.
    pub fn normalize(&self, records: &[RawRecord]) -> Vec<Post> {
        records.iter().filter_map(|r| self.to_post(r)).collect()
    }

    /// Normalization for listings: also requires title or content to be present.
    pub fn normalize_listing(&self, records: &[RawRecord]) -> Vec<Post> {
        records
            .iter()
            .filter(|r| has_value(r, "title") || has_value(r, "content"))
            .filter_map(|r| self.to_post(r))
            .collect()
    }

    /// Keep only posts visible in published listings.
    pub fn published(&self, posts: Vec<Post>) -> Vec<Post> {
        posts
            .into_iter()
            .filter(|post| !self.is_draft(post))
            .collect()
    }

    /// Whether a post carries the draft status.
    pub fn is_draft(&self, post: &Post) -> bool {
        post.is_draft(&self.draft_status)
    }

    /// Build one post, or `None` when the title is blank.
    pub fn to_post(&self, record: &RawRecord) -> Option<Post> {
        let title = field(record, "title");
        if title.is_empty() {
            return None;
        }

        let category = match field(record, "category") {
            "" => self.default_category.clone(),
            category => category.to_string(),
        };

        let extra = record
            .iter()
            .filter(|(column, _)| !RESERVED_COLUMNS.contains(&column.as_str()))
            .map(|(column, value)| (column.clone(), value.clone()))
            .collect();

        Some(Post {
            slug: slugify(title),
            title: title.to_string(),
            content: field(record, "content").to_string(),
            category,
            tags: split_list(field(record, "tags")),
            status: field(record, "status").to_string(),
            extra,
        })
    }
}

fn field<'a>(record: &'a RawRecord, column: &str) -> &'a str {
    record.get(column).map_or("", |value| value.trim())
}

fn has_value(record: &RawRecord, column: &str) -> bool {
    !field(record, column).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_blank_title_is_discarded() {
        let normalizer = PostNormalizer::default();
        let records = vec![
            record(&[("title", ""), ("content", "Body only")]),
            record(&[("title", "   "), ("content", "Whitespace title")]),
            record(&[("content", "No title column")]),
        ];

        assert!(normalizer.normalize(&records).is_empty());
        assert!(normalizer.normalize_listing(&records).is_empty());
    }

    #[test]
    fn test_title_without_content_is_kept() {
        let normalizer = PostNormalizer::default();
        let posts = normalizer.normalize(&[record(&[("title", "Only a title")])]);

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "");
        assert_eq!(posts[0].slug, "only-a-title");
    }

    #[test]
    fn test_defaults_and_tags() {
        let normalizer = PostNormalizer::default();
        let post = normalizer
            .to_post(&record(&[
                ("title", "Hello, World"),
                ("category", ""),
                ("tags", "js, web,"),
            ]))
            .unwrap();

        assert_eq!(post.category, "Uncategorized");
        assert_eq!(post.tags, vec!["js", "web"]);
        assert_eq!(post.slug, "hello-world");
    }

    #[test]
    fn test_custom_default_category() {
        let normalizer = PostNormalizer::new(&PostsConfig {
            default_category: "General".to_string(),
            ..PostsConfig::default()
        });
        let post = normalizer.to_post(&record(&[("title", "x")])).unwrap();
        assert_eq!(post.category, "General");
    }

    #[test]
    fn test_extra_columns_pass_through() {
        let normalizer = PostNormalizer::default();
        let post = normalizer
            .to_post(&record(&[
                ("title", "Post"),
                ("slug", "custom-slug"),
                ("author", "Admin"),
                ("date", "2025-01-18"),
            ]))
            .unwrap();

        assert_eq!(post.slug, "post");
        assert_eq!(post.extra["author"], "Admin");
        assert_eq!(post.extra["date"], "2025-01-18");
        assert!(!post.extra.contains_key("slug"));
        assert!(!post.extra.contains_key("title"));
    }

    #[test]
    fn test_drafts_are_normalized_but_not_published() {
        let normalizer = PostNormalizer::default();
        let posts = normalizer.normalize(&[
            record(&[("title", "Live"), ("status", "published")]),
            record(&[("title", "Hidden"), ("status", "draft")]),
            record(&[("title", "No status")]),
        ]);
        assert_eq!(posts.len(), 3);

        let published = normalizer.published(posts);
        let titles: Vec<&str> = published.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Live", "No status"]);
    }

    #[test]
    fn test_draft_status_matches_case_and_padding() {
        let normalizer = PostNormalizer::default();
        let posts = normalizer.normalize(&[
            record(&[("title", "Upper"), ("status", "DRAFT")]),
            record(&[("title", "Padded"), ("status", " draft ")]),
            record(&[("title", "Live"), ("status", "published")]),
        ]);
        assert_eq!(posts.len(), 3);

        let published = normalizer.published(posts);
        let titles: Vec<&str> = published.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Live"]);
    }
}
