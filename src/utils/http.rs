// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::redirect::Policy;

use crate::error::Result;
use crate::models::FetchConfig;

/// Create a configured asynchronous HTTP client.
///
/// The timeout bounds each request on its own; redirects are followed up to
/// `max_redirects` hops so the final location can be inspected.
pub fn create_async_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .build()?;
    Ok(client)
}
