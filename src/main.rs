//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_meta_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_meta_checker::initialization::init_logger_with;
use seo_meta_checker::{analyze_url, render_json, render_text, Opt, OutputFormat};

fn print_usage() {
    println!("Usage: seo_meta_checker <url> [--json]");
    println!("Example: seo_meta_checker https://example.com");
}

#[tokio::main]
async fn main() -> Result<()> {
    let Some(config) = Opt::parse().into_config() else {
        print_usage();
        process::exit(1);
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match analyze_url(&config).await {
        Ok(report) => {
            let output = match config.output {
                OutputFormat::Json => {
                    render_json(&report).context("Failed to serialize report")?
                }
                OutputFormat::Text => render_text(&report),
            };
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            let e = anyhow::Error::new(e).context(format!("Failed to analyze {}", config.url));
            eprintln!("seo_meta_checker error: {:#}", e);
            process::exit(1);
        }
    }
}
