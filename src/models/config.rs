//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils::url::render_template;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Spreadsheet location and candidate export endpoints
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client behavior
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Post normalization rules
    #[serde(default)]
    pub posts: PostsConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Override selected values from `SHEETPOST_*` environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(id) = std::env::var("SHEETPOST_SPREADSHEET_ID") {
            self.source.spreadsheet_id = id;
        }

        if let Ok(sheet) = std::env::var("SHEETPOST_SHEET_NAME") {
            self.source.sheet_name = sheet;
        }

        if let Ok(timeout) = std::env::var("SHEETPOST_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.fetch.timeout_secs = secs;
            }
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.spreadsheet_id.trim().is_empty() {
            return Err(AppError::validation("source.spreadsheet_id is empty"));
        }
        if self.source.url_templates.is_empty() {
            return Err(AppError::validation("source.url_templates is empty"));
        }
        for template in &self.source.url_templates {
            if !template.contains("{id}") {
                return Err(AppError::validation(format!(
                    "source.url_templates entry has no {{id}} placeholder: {template}"
                )));
            }
            let rendered = render_template(
                template,
                &self.source.spreadsheet_id,
                &self.source.gid,
                &self.source.sheet_name,
            );
            url::Url::parse(&rendered).map_err(|e| {
                AppError::validation(format!("source.url_templates entry {template}: {e}"))
            })?;
        }
        if matches!(self.source.delimiter, '"' | '\n' | '\r') {
            return Err(AppError::validation(
                "source.delimiter must not be a quote or newline",
            ));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Where the spreadsheet lives and how to reach its CSV export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Spreadsheet identifier substituted for `{id}`
    #[serde(default)]
    pub spreadsheet_id: String,

    /// Sheet (tab) name substituted for `{sheet}`
    #[serde(default = "defaults::sheet_name")]
    pub sheet_name: String,

    /// Sheet tab id substituted for `{gid}`
    #[serde(default = "defaults::gid")]
    pub gid: String,

    /// Candidate export URLs, most reliable first
    #[serde(default = "defaults::url_templates")]
    pub url_templates: Vec<String>,

    /// Hosts that indicate the request was bounced to a sign-in page
    #[serde(default = "defaults::login_hosts")]
    pub login_hosts: Vec<String>,

    /// Field delimiter of the exported text
    #[serde(default = "defaults::delimiter")]
    pub delimiter: char,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            sheet_name: defaults::sheet_name(),
            gid: defaults::gid(),
            url_templates: defaults::url_templates(),
            login_hosts: defaults::login_hosts(),
            delimiter: defaults::delimiter(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-attempt timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Redirect hops followed before an attempt fails
    #[serde(default = "defaults::max_redirects")]
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_redirects: defaults::max_redirects(),
        }
    }
}

/// Post mapping rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    /// Category assigned when the sheet leaves it blank
    #[serde(default = "defaults::default_category")]
    pub default_category: String,

    /// Status value that hides a post from published listings
    #[serde(default = "defaults::draft_status")]
    pub draft_status: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            default_category: defaults::default_category(),
            draft_status: defaults::draft_status(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Source defaults
    pub fn sheet_name() -> String {
        "WEBSITE".into()
    }
    pub fn gid() -> String {
        "0".into()
    }
    pub fn url_templates() -> Vec<String> {
        vec![
            "https://docs.google.com/spreadsheets/d/{id}/export?format=csv&gid={gid}".into(),
            "https://docs.google.com/spreadsheets/d/{id}/export?format=csv".into(),
            "https://docs.google.com/spreadsheets/d/{id}/gviz/tq?tqx=out:csv&sheet={sheet}".into(),
            "https://docs.google.com/spreadsheets/d/{id}/pub?output=csv".into(),
        ]
    }
    pub fn login_hosts() -> Vec<String> {
        vec!["accounts.google.com".into()]
    }
    pub fn delimiter() -> char {
        ','
    }

    // Fetch defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; sheetpost/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn max_redirects() -> usize {
        10
    }

    // Post defaults
    pub fn default_category() -> String {
        "Uncategorized".into()
    }
    pub fn draft_status() -> String {
        "draft".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.source.spreadsheet_id = "sheet123".to_string();
        config
    }

    #[test]
    fn validate_rejects_missing_spreadsheet_id() {
        assert!(Config::default().validate().is_err());
    }

    #[test]
    fn validate_accepts_configured_defaults() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn validate_rejects_template_without_id() {
        let mut config = configured();
        config
            .source
            .url_templates
            .push("https://example.com/static.csv".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_template() {
        let mut config = configured();
        config.source.url_templates = vec!["/sheets/{id}.csv".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = configured();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_quote_delimiter() {
        let mut config = configured();
        config.source.delimiter = '"';
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_templates_keep_declared_order() {
        let templates = Config::default().source.url_templates;
        assert_eq!(templates.len(), 4);
        assert!(templates[0].contains("gid={gid}"));
        assert!(templates[3].contains("pub?output=csv"));
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[source]\nspreadsheet_id = \"abc\"\ndelimiter = \";\"\n\n[fetch]\ntimeout_secs = 3"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source.spreadsheet_id, "abc");
        assert_eq!(config.source.delimiter, ';');
        assert_eq!(config.fetch.timeout_secs, 3);
        assert_eq!(config.source.url_templates.len(), 4);
        assert_eq!(config.posts.default_category, "Uncategorized");
    }

    #[test]
    fn example_config_matches_defaults() {
        let config: Config = toml::from_str(include_str!("../../sheetpost.example.toml")).unwrap();
        let defaults = Config::default();
        assert_eq!(config.source.url_templates, defaults.source.url_templates);
        assert_eq!(config.fetch.user_agent, defaults.fetch.user_agent);
        assert_eq!(config.posts.draft_status, defaults.posts.draft_status);
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert!(config.source.spreadsheet_id.is_empty());
        assert_eq!(config.fetch.timeout_secs, 10);
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        match Config::load(&path) {
            Err(AppError::Config(message)) => assert!(message.contains("missing.toml")),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
