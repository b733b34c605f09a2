//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option can also be supplied through an environment
//! variable, which is how the service is usually configured in containers.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_COUNTRY_ONLY_LIMIT, DEFAULT_GEOCODER_URL,
    DEFAULT_LISTEN_ADDR, DEFAULT_MIN_INTERVAL_MS, DEFAULT_RETRY_BASE_DELAY_MS,
    DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_RETRY_MAX_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, MAX_COUNTRY_ONLY_LIMIT,
};
use crate::error_handling::ConfigError;

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
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line and environment by the binary, or constructed
/// programmatically (usually from `Default`) by tests and embedders.
///
/// # Examples
///
/// ```no_run
/// use real_address::Config;
///
/// let config = Config {
///     geocoder_url: "http://localhost:8080".to_string(),
///     min_interval_ms: 0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "real_address", version, about)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Base URL of the Nominatim-compatible geocoding service
    #[arg(long, env = "GEOCODER_URL", default_value = DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// Identifying User-Agent sent with every geocoder request
    #[arg(long, env = "GEOCODER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Contact email sent in the `From` header of geocoder requests
    #[arg(long, env = "GEOCODER_CONTACT_EMAIL")]
    pub contact_email: Option<String>,

    /// Preferred language for address components
    #[arg(long, env = "GEOCODER_ACCEPT_LANGUAGE", default_value = DEFAULT_ACCEPT_LANGUAGE)]
    pub accept_language: String,

    /// Minimum interval between two geocoder requests, in milliseconds
    #[arg(long, env = "GEOCODER_MIN_INTERVAL_MS", default_value_t = DEFAULT_MIN_INTERVAL_MS)]
    pub min_interval_ms: u64,

    /// Per-request timeout for geocoder calls, in seconds
    #[arg(long, env = "GEOCODER_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Attempts per fallback tier for transient failures (initial attempt included)
    #[arg(long, env = "RETRY_MAX_ATTEMPTS", default_value_t = DEFAULT_RETRY_MAX_ATTEMPTS)]
    pub retry_max_attempts: usize,

    /// Delay before the first retry in milliseconds (doubles per retry)
    #[arg(long, env = "RETRY_BASE_DELAY_MS", default_value_t = DEFAULT_RETRY_BASE_DELAY_MS)]
    pub retry_base_delay_ms: u64,

    /// Upper bound for a single retry delay in milliseconds
    #[arg(long, env = "RETRY_MAX_DELAY_MS", default_value_t = DEFAULT_RETRY_MAX_DELAY_MS)]
    pub retry_max_delay_ms: u64,

    /// Candidates requested when searching the whole country
    #[arg(long, env = "COUNTRY_ONLY_LIMIT", default_value_t = DEFAULT_COUNTRY_ONLY_LIMIT)]
    pub country_only_limit: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            contact_email: None,
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            retry_max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
            retry_base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            retry_max_delay_ms: DEFAULT_RETRY_MAX_DELAY_MS,
            country_only_limit: DEFAULT_COUNTRY_ONLY_LIMIT,
        }
    }
}

impl Config {
    /// Checks the configuration for values the service cannot run with.
    ///
    /// Called once at startup, before any resource is initialized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingUserAgent);
        }
        self.geocoder_base_url()?;
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.retry_max_attempts == 0 {
            return Err(ConfigError::ZeroRetryAttempts);
        }
        if self.retry_base_delay_ms < 2 {
            return Err(ConfigError::RetryDelayTooSmall(self.retry_base_delay_ms));
        }
        if self.retry_max_delay_ms < self.retry_base_delay_ms {
            return Err(ConfigError::RetryDelayBounds {
                base_ms: self.retry_base_delay_ms,
                max_ms: self.retry_max_delay_ms,
            });
        }
        if self.country_only_limit == 0 || self.country_only_limit > MAX_COUNTRY_ONLY_LIMIT {
            return Err(ConfigError::CandidateLimit(self.country_only_limit));
        }
        Ok(())
    }

    /// Parses `geocoder_url`, accepting only http(s) URLs.
    pub fn geocoder_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.geocoder_url).map_err(|e| ConfigError::InvalidGeocoderUrl {
            url: self.geocoder_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidGeocoderUrl {
                url: self.geocoder_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
