//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the finished report is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary with pass/fail markers
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use seo_meta_checker::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to analyze
    pub url: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report format
    pub output: OutputFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum number of redirect hops to follow before giving up
    pub max_redirects: usize,

    /// Bound for the whole fetch in seconds; derived from the per-request
    /// timeout and hop limit when `None`
    pub analysis_timeout_seconds: Option<u64>,
}

impl Config {
    /// Time allowed for the whole fetch, every redirect hop included.
    ///
    /// Defaults to one per-request timeout for the initial request and for
    /// each allowed redirect.
    pub fn analysis_timeout(&self) -> Duration {
        let seconds = self.analysis_timeout_seconds.unwrap_or_else(|| {
            let requests = u64::try_from(self.max_redirects)
                .unwrap_or(u64::MAX)
                .saturating_add(1);
            self.timeout_seconds.saturating_mul(requests)
        });
        Duration::from_secs(seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output: OutputFormat::Text,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
            analysis_timeout_seconds: None,
        }
    }
}

/// Command-line options for the `seo_meta_checker` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_meta_checker",
    about = "Checks the SEO meta tags of a web page and scores them out of 10"
)]
pub struct Opt {
    /// Page URL to analyze (https:// is assumed when no scheme is given)
    pub url: Option<String>,

    /// Print the report as JSON instead of the formatted summary
    #[arg(long)]
    pub json: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum number of redirect hops to follow
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Bound for the whole fetch in seconds (default: timeout x (max redirects + 1))
    #[arg(long)]
    pub analysis_timeout_seconds: Option<u64>,
}

impl Opt {
    /// Converts parsed options into a library [`Config`].
    ///
    /// Returns `None` when no URL was given so the caller can print usage.
    pub fn into_config(self) -> Option<Config> {
        let url = self.url?;
        Some(Config {
            url,
            log_level: self.log_level,
            log_format: self.log_format,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent,
            max_redirects: self.max_redirects,
            analysis_timeout_seconds: self.analysis_timeout_seconds,
        })
    }
}
