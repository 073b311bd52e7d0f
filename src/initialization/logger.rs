//! Log output on stderr, plain or one JSON object per line.

use std::io::Write;

use colored::{ColoredString, Colorize};
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

fn paint(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug | Level::Trace => name.dimmed(),
    }
}

fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(buf, "{} {}: {}", paint(record.level()), record.target(), record.args())
}

fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{}", line)
}

/// Installs the global logger.
///
/// `level` wins over `RUST_LOG` for this crate; reqwest is capped at info.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("reqwest", level.min(LevelFilter::Info))
        .filter_module("seo_meta_checker", level);

    match format {
        LogFormat::Plain => builder.format(write_plain),
        LogFormat::Json => builder.format(write_json),
    };

    builder.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_plain_format() {
        // Only the first initialization in a process succeeds
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_json_format() {
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_second_initialization_fails_gracefully() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_level_colors_keep_level_name() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
            assert!(paint(level).to_string().contains(level.as_str()));
        }
    }
}
