//! Pipeline entry points for the read operations.
//!
//! - `Pipeline::get_posts`: published posts
//! - `Pipeline::get_stats`: counts over every normalized post
//! - `Pipeline::get_categories` / `get_tags` / `get_post`: derived views

pub mod orchestrator;

pub use orchestrator::Pipeline;
