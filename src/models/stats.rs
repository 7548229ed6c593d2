//! Aggregate statistics over a post collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary counts, computed fresh for every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of posts aggregated
    pub total_posts: usize,

    /// Distinct categories (defaulted categories included)
    pub total_categories: usize,

    /// Distinct non-empty tags
    pub total_tags: usize,

    /// Aggregated posts that are not drafts
    pub published_posts: usize,

    /// When these numbers were computed
    pub last_updated: DateTime<Utc>,
}

impl Stats {
    /// Stats for an empty collection.
    pub fn empty() -> Self {
        Self {
            total_posts: 0,
            total_categories: 0,
            total_tags: 0,
            published_posts: 0,
            last_updated: Utc::now(),
        }
    }
}

/// Number of posts filed under one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Number of posts carrying one tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}
