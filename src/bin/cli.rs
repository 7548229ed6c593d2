//! sheetpost CLI
//!
//! Runs the read operations against the configured spreadsheet and prints
//! their JSON envelopes to stdout. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use sheetpost::{
    error::{AppError, Result},
    models::Config,
    pipeline::Pipeline,
};

/// sheetpost - blog posts from a public spreadsheet
#[derive(Parser, Debug)]
#[command(
    name = "sheetpost",
    version,
    about = "Blog posts served from a spreadsheet CSV export"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "sheetpost.toml")]
    config: PathBuf,

    /// Spreadsheet identifier (overrides config and environment)
    #[arg(long)]
    sheet_id: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List published posts
    Posts,

    /// Show one published post by slug
    Post {
        /// Slug derived from the post title
        slug: String,
    },

    /// Show post, category and tag totals
    Stats,

    /// Count posts per category
    Categories,

    /// Count posts per tag
    Tags,

    /// Print the candidate export URLs in trial order
    Sources,

    /// Validate the configuration
    Validate,
}

/// Initialize logging with the given default level; `RUST_LOG` takes precedence.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Ok(config), false) => config.logging.level.clone(),
        (Err(_), false) => "info".to_string(),
    };
    init_logging(&level);

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });
    config.apply_env();
    if let Some(id) = cli.sheet_id {
        config.source.spreadsheet_id = id;
    }

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    let config = Arc::new(config);
    let pipeline = Pipeline::from_config(Arc::clone(&config))?;

    match cli.command {
        Command::Posts => print_json(&pipeline.get_posts().await, cli.pretty)?,

        Command::Post { slug } => {
            let response = pipeline.get_post(&slug).await;
            print_json(&response, cli.pretty)?;
            if !response.success {
                return Err(AppError::not_found(slug));
            }
        }

        Command::Stats => print_json(&pipeline.get_stats().await, cli.pretty)?,

        Command::Categories => print_json(&pipeline.get_categories().await, cli.pretty)?,

        Command::Tags => print_json(&pipeline.get_tags().await, cli.pretty)?,

        Command::Sources => print_json(&pipeline.sources(), cli.pretty)?,

        Command::Validate => {
            log::info!("✓ Config OK");
            log::info!("Spreadsheet: {}", config.source.spreadsheet_id);
            log::info!("Candidate URLs: {}", config.source.url_templates.len());
            log::info!("Timeout: {}s", config.fetch.timeout_secs);
            log::info!("User agent: {}", config.fetch.user_agent);
        }
    }

    Ok(())
}
