//! Centralized logging configuration for all Bistro binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Per-module log level filtering
//! - Writing to a file instead of stderr (the TUI owns the terminal)
//!
//! # Examples
//!
//! ```no_run
//! use libbistro::logging::{LoggingConfig, LogFormat};
//!
//! // Initialize with JSON format
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().expect("logging");
//!
//! // Or use default settings (respects env vars)
//! libbistro::logging::init_default().expect("logging");
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    /// Send log output to `path` (created if missing, appended otherwise)
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file = Some(path);
        self
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    ///
    /// # Panics
    ///
    /// Panics if the logging subscriber has already been initialized
    pub fn init(&self) -> std::io::Result<()> {
        // Determine the filter based on verbose flag and level
        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };

        match self.file {
            Some(ref path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                self.init_with_writer(filter, Mutex::new(file), false);
            }
            None => self.init_with_writer(filter, std::io::stderr, true),
        }

        Ok(())
    }

    fn init_with_writer<W>(&self, filter: EnvFilter, writer: W, ansi: bool)
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        match self.format {
            LogFormat::Json => {
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }
    }
}

/// Build a logging configuration from the environment
///
/// Respects `BISTRO_LOG_FORMAT`, `BISTRO_LOG_LEVEL` and `BISTRO_LOG_FILE`.
/// Falls back to text format with info level on stderr if not set.
pub fn config_from_env() -> LoggingConfig {
    let format = std::env::var("BISTRO_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("BISTRO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let config = LoggingConfig::new(format, level, false);
    match std::env::var("BISTRO_LOG_FILE") {
        Ok(path) => config.with_file(PathBuf::from(shellexpand::tilde(&path).to_string())),
        Err(_) => config,
    }
}

/// Initialize logging with default settings
///
/// # Examples
///
/// ```bash
/// # Use JSON logging
/// export BISTRO_LOG_FORMAT=json
/// export BISTRO_LOG_LEVEL=debug
/// bistro-meals --search soup
/// ```
pub fn init_default() -> std::io::Result<()> {
    config_from_env().init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "xml".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_logging_config_with_file() {
        let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), true)
            .with_file(PathBuf::from("/tmp/bistro.log"));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(config.verbose);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/bistro.log")));
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        std::env::set_var("BISTRO_LOG_FORMAT", "json");
        std::env::set_var("BISTRO_LOG_LEVEL", "warn");
        std::env::set_var("BISTRO_LOG_FILE", "/tmp/bistro-env.log");
        let config = config_from_env();
        std::env::remove_var("BISTRO_LOG_FORMAT");
        std::env::remove_var("BISTRO_LOG_LEVEL");
        std::env::remove_var("BISTRO_LOG_FILE");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "warn");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/bistro-env.log")));
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        std::env::remove_var("BISTRO_LOG_FORMAT");
        std::env::remove_var("BISTRO_LOG_LEVEL");
        std::env::remove_var("BISTRO_LOG_FILE");
        let config = config_from_env();

        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "info");
        assert!(config.file.is_none());
    }
}
