// src/pipeline/orchestrator.rs

//! Read operations over the spreadsheet-backed post collection.
//!
//! Every operation re-fetches and re-normalizes the sheet; nothing is cached
//! between calls.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{
    CategoriesResponse, Config, Post, PostResponse, PostsResponse, RawRecord, StatsResponse,
    TagsResponse,
};
use crate::services::{Aggregator, HttpTransport, PostNormalizer, ReqwestTransport, SourceFetcher};

/// Composes fetching, decoding, normalization and aggregation.
pub struct Pipeline {
    config: Arc<Config>,
    fetcher: SourceFetcher,
    normalizer: PostNormalizer,
    aggregator: Aggregator,
}

impl Pipeline {
    /// Create a pipeline over an explicit transport.
    pub fn new(config: Arc<Config>, transport: Arc<dyn HttpTransport>) -> Self {
        let fetcher = SourceFetcher::new(&config.source, transport);
        let normalizer = PostNormalizer::new(&config.posts);
        let aggregator = Aggregator::new(&config.posts);

        Self {
            config,
            fetcher,
            normalizer,
            aggregator,
        }
    }

    /// Create a pipeline that fetches over HTTP with the configured client.
    pub fn from_config(config: Arc<Config>) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.fetch)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    /// Candidate URLs for the configured spreadsheet, in trial order.
    pub fn sources(&self) -> Vec<String> {
        self.fetcher.candidate_urls(&self.config.source.spreadsheet_id)
    }

    async fn load(&self) -> Vec<RawRecord> {
        self.fetcher.fetch(&self.config.source.spreadsheet_id).await
    }

    async fn load_posts(&self) -> Vec<Post> {
        self.normalizer.normalize(&self.load().await)
    }

    async fn load_published(&self) -> Vec<Post> {
        let posts = self.normalizer.normalize_listing(&self.load().await);
        self.normalizer.published(posts)
    }

    /// Published posts.
    pub async fn get_posts(&self) -> PostsResponse {
        let posts = self.load_published().await;
        log::info!("Serving {} published post(s)", posts.len());
        PostsResponse::new(posts)
    }

    /// Counts over every normalized post, drafts included.
    pub async fn get_stats(&self) -> StatsResponse {
        let posts = self.load_posts().await;
        StatsResponse {
            success: true,
            stats: self.aggregator.aggregate(&posts),
        }
    }

    /// Posts per category over every normalized post.
    pub async fn get_categories(&self) -> CategoriesResponse {
        let posts = self.load_posts().await;
        CategoriesResponse {
            success: true,
            categories: self.aggregator.category_counts(&posts),
        }
    }

    /// Posts per tag over every normalized post.
    pub async fn get_tags(&self) -> TagsResponse {
        let posts = self.load_posts().await;
        TagsResponse {
            success: true,
            tags: self.aggregator.tag_counts(&posts),
        }
    }

    /// First published post with the given slug.
    pub async fn get_post(&self, slug: &str) -> PostResponse {
        let found = self
            .load_published()
            .await
            .into_iter()
            .find(|post| !post.slug.is_empty() && post.slug == slug);

        match found {
            Some(post) => PostResponse::found(post),
            None => {
                log::debug!("No published post with slug {:?}", slug);
                PostResponse::not_found()
            }
        }
    }
}
