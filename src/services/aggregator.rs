// src/services/aggregator.rs

//! Summary statistics over normalized posts.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;

use crate::models::{CategoryCount, Post, PostsConfig, Stats, TagCount};

/// Computes counts over whichever post set the caller passes in.
#[derive(Debug, Clone)]
pub struct Aggregator {
    draft_status: String,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(&PostsConfig::default())
    }
}

impl Aggregator {
    pub fn new(config: &PostsConfig) -> Self {
        Self {
            draft_status: config.draft_status.clone(),
        }
    }

    /// Totals for posts, distinct categories and distinct tags.
    pub fn aggregate(&self, posts: &[Post]) -> Stats {
        let categories: HashSet<&str> = posts.iter().map(|p| p.category.as_str()).collect();
        let tags: HashSet<&str> = posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        let published = posts.iter().filter(|p| !p.is_draft(&self.draft_status)).count();

        Stats {
            total_posts: posts.len(),
            total_categories: categories.len(),
            total_tags: tags.len(),
            published_posts: published,
            last_updated: Utc::now(),
        }
    }

    /// Posts per category, sorted by name.
    pub fn category_counts(&self, posts: &[Post]) -> Vec<CategoryCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for post in posts {
            *counts.entry(post.category.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(name, count)| CategoryCount {
                name: name.to_string(),
                count,
            })
            .collect()
    }

    /// Posts per tag, sorted by name. A tag repeated within one post counts once.
    pub fn tag_counts(&self, posts: &[Post]) -> Vec<TagCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for post in posts {
            let distinct: HashSet<&str> = post.tags.iter().map(String::as_str).collect();
            for tag in distinct {
                *counts.entry(tag).or_default() += 1;
            }
        }

        counts
            .into_iter()
            .map(|(name, count)| TagCount {
                name: name.to_string(),
                count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn post(title: &str, category: &str, tags: &[&str], status: &str) -> Post {
        Post {
            title: title.to_string(),
            content: String::new(),
            slug: crate::utils::slug::slugify(title),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            status: status.to_string(),
            extra: BTreeMap::new(),
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post("Hello, World", "Tech", &["js", "web"], "published"),
            post("Draft Post", "News", &["news"], "draft"),
            post("Another", "Tech", &["web"], ""),
        ]
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = Aggregator::default().aggregate(&[]);
        assert_eq!(stats.total_posts, 0);
        assert_eq!(stats.total_categories, 0);
        assert_eq!(stats.total_tags, 0);
        assert_eq!(stats.published_posts, 0);
    }

    #[test]
    fn test_aggregate_counts_distinct_values() {
        let stats = Aggregator::default().aggregate(&sample());
        assert_eq!(stats.total_posts, 3);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.total_tags, 3);
        assert_eq!(stats.published_posts, 2);
    }

    #[test]
    fn test_published_count_uses_configured_status() {
        let aggregator = Aggregator::new(&PostsConfig {
            draft_status: "hidden".to_string(),
            ..PostsConfig::default()
        });
        let posts = vec![
            post("a", "x", &[], "hidden"),
            post("b", "x", &[], "draft"),
        ];
        assert_eq!(aggregator.aggregate(&posts).published_posts, 1);
    }

    #[test]
    fn test_category_counts_sorted_by_name() {
        let counts = Aggregator::default().category_counts(&sample());
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    name: "News".to_string(),
                    count: 1
                },
                CategoryCount {
                    name: "Tech".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_tag_counts_once_per_post() {
        let posts = vec![
            post("a", "x", &["rust", "rust", "web"], ""),
            post("b", "x", &["web"], ""),
        ];
        let counts = Aggregator::default().tag_counts(&posts);
        let pairs: Vec<(&str, usize)> = counts.iter().map(|t| (t.name.as_str(), t.count)).collect();
        assert_eq!(pairs, vec![("rust", 1), ("web", 2)]);
    }
}
