// src/models/mod.rs

//! Domain models for the sheetpost application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod post;
mod response;
mod stats;

// Re-export all public types
pub use config::{Config, FetchConfig, LoggingConfig, PostsConfig, SourceConfig};
pub use post::{Post, RESERVED_COLUMNS, RawRecord};
pub use response::{CategoriesResponse, PostResponse, PostsResponse, StatsResponse, TagsResponse};
pub use stats::{CategoryCount, Stats, TagCount};
