// src/services/fetcher.rs

//! Spreadsheet source fetcher.
//!
//! Tries each candidate export URL in declared order and decodes the first
//! response that looks like tabular text. Every per-candidate failure is
//! logged and skipped; exhausting the list yields an empty record set.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{FetchConfig, RawRecord, SourceConfig};
use crate::services::CsvDecoder;
use crate::utils::http;
use crate::utils::url::{is_login_redirect, render_template};

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code of the final response
    pub status: u16,
    /// Effective URL after redirects
    pub final_url: String,
    /// Response body as text
    pub body: String,
}

/// Minimal GET capability used by the fetcher.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request and read the whole body.
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// `HttpTransport` backed by a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured user agent, timeout and redirect limit.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            client: http::create_async_client(config)?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::transport(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(url, e))?;

        Ok(HttpResponse {
            status,
            final_url,
            body,
        })
    }
}

/// Why a candidate response was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Non-2xx status
    Status(u16),
    /// Redirected to a sign-in page
    LoginRedirect(String),
    /// Body is empty or whitespace
    EmptyBody,
    /// Body is an HTML document
    HtmlBody,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Status(code) => write!(f, "status {code}"),
            Rejection::LoginRedirect(url) => write!(f, "redirected to sign-in at {url}"),
            Rejection::EmptyBody => write!(f, "empty body"),
            Rejection::HtmlBody => write!(f, "HTML document instead of CSV"),
        }
    }
}

/// A response that passed inspection.
#[derive(Debug, Clone)]
pub struct FetchedSource {
    /// Candidate URL that produced the body
    pub url: String,
    /// Raw CSV text
    pub body: String,
}

/// Walks the candidate URLs for a spreadsheet until one yields CSV.
#[derive(Clone)]
pub struct SourceFetcher {
    transport: Arc<dyn HttpTransport>,
    decoder: CsvDecoder,
    templates: Vec<String>,
    gid: String,
    sheet_name: String,
    login_hosts: Vec<String>,
}

impl SourceFetcher {
    /// Create a fetcher for the configured templates over the given transport.
    pub fn new(config: &SourceConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            decoder: CsvDecoder::new(config.delimiter),
            templates: config.url_templates.clone(),
            gid: config.gid.clone(),
            sheet_name: config.sheet_name.clone(),
            login_hosts: config.login_hosts.clone(),
        }
    }

    /// Rendered candidate URLs for a spreadsheet, in trial order.
    pub fn candidate_urls(&self, spreadsheet_id: &str) -> Vec<String> {
        self.templates
            .iter()
            .map(|t| render_template(t, spreadsheet_id, &self.gid, &self.sheet_name))
            .collect()
    }

    /// Fetch and decode the spreadsheet; empty when no candidate succeeds.
    pub async fn fetch(&self, spreadsheet_id: &str) -> Vec<RawRecord> {
        match self.fetch_source(spreadsheet_id).await {
            Some(source) => {
                let records = self.decoder.decode(&source.body);
                log::debug!("Decoded {} record(s) from {}", records.len(), source.url);
                records
            }
            None => Vec::new(),
        }
    }

    /// Return the first accepted candidate body without decoding it.
    pub async fn fetch_source(&self, spreadsheet_id: &str) -> Option<FetchedSource> {
        let candidates = self.candidate_urls(spreadsheet_id);

        for url in candidates {
            log::debug!("Trying source URL: {}", url);

            let response = match self.transport.get(&url).await {
                Ok(response) => response,
                Err(error) => {
                    log::warn!("Source request failed ({}): {}", url, error);
                    continue;
                }
            };

            match self.inspect(&response) {
                Ok(()) => {
                    log::info!("Loaded spreadsheet data from {}", url);
                    return Some(FetchedSource {
                        url,
                        body: response.body,
                    });
                }
                Err(rejection) => {
                    log::warn!("Skipping source URL {}: {}", url, rejection);
                }
            }
        }

        log::warn!(
            "No source URL returned usable data for spreadsheet {}",
            spreadsheet_id
        );
        None
    }

    /// Decide whether a response carries usable tabular data.
    pub fn inspect(&self, response: &HttpResponse) -> std::result::Result<(), Rejection> {
        if !(200..300).contains(&response.status) {
            return Err(Rejection::Status(response.status));
        }
        if is_login_redirect(&response.final_url, &self.login_hosts) {
            return Err(Rejection::LoginRedirect(response.final_url.clone()));
        }
        if response.body.trim().is_empty() {
            return Err(Rejection::EmptyBody);
        }
        if looks_like_html(&response.body) {
            return Err(Rejection::HtmlBody);
        }
        Ok(())
    }
}

/// Detect an HTML document by its doctype or root tag.
fn looks_like_html(body: &str) -> bool {
    let lowered = body.to_ascii_lowercase();
    lowered.contains("<!doctype") || lowered.contains("<html")
}
