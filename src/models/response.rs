//! Serializable envelopes returned by the pipeline operations.

use serde::Serialize;

use super::{CategoryCount, Post, Stats, TagCount};

/// Published post listing.
#[derive(Debug, Clone, Serialize)]
pub struct PostsResponse {
    pub success: bool,
    pub posts: Vec<Post>,
    pub total: usize,
}

impl PostsResponse {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            success: true,
            total: posts.len(),
            posts,
        }
    }
}

/// Aggregate counts.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: Stats,
}

/// Posts per category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryCount>,
}

/// Posts per tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagsResponse {
    pub success: bool,
    pub tags: Vec<TagCount>,
}

/// Single post lookup by slug.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PostResponse {
    pub fn found(post: Post) -> Self {
        Self {
            success: true,
            post: Some(post),
            message: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            post: None,
            message: Some("Post not found".to_string()),
        }
    }
}
