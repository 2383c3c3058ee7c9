// ABOUTME: Environment configuration for the GameShelf client
// ABOUTME: Reads the API base URL, HTTP timeouts, credential location, and log level from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors

//! Environment-based client configuration

use gameshelf_core::constants::{env_config, http, storage};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Failure to assemble a usable client configuration
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("Invalid value for {key}: {reason}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Parse failure description
        reason: String,
    },

    /// No directory is available for the default credential file
    #[error("Cannot determine a configuration directory; set {0}")]
    NoConfigDir(&'static str),
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to the matching `tracing` level
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from a string, falling back to `Info`.
    ///
    /// Accepts a bare level or the leading level of an env-filter directive
    /// such as `debug,hyper=warn`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let head = s.split(',').next().unwrap_or_default().trim();
        match head.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from a string, falling back to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Whether this is a production deployment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Timeouts applied by the HTTP transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// TCP connect timeout
    pub connect_timeout_secs: u64,
}

impl HttpClientConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout as a `Duration`
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: http::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub api_base_url: Url,
    /// Transport timeouts
    pub http: HttpClientConfig,
    /// Location of the durable credential file
    pub credentials_path: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// Default log level
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// Configuration for a base URL with every other setting at its default
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or no config directory exists
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            http: HttpClientConfig::default(),
            credentials_path: default_credentials_path()?,
            environment: Environment::default(),
            log_level: LogLevel::default(),
        })
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or any variable fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }

        let base_url = env::var(env_config::API_BASE_URL)
            .map_err(|_| ConfigError::Missing(env_config::API_BASE_URL))?;

        let credentials_path = match env::var(env_config::CREDENTIALS_PATH) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_credentials_path()?,
        };

        let config = Self {
            api_base_url: parse_base_url(&base_url)?,
            http: HttpClientConfig {
                timeout_secs: env_u64(env_config::HTTP_TIMEOUT_SECS, http::DEFAULT_TIMEOUT_SECS)?,
                connect_timeout_secs: env_u64(
                    env_config::CONNECT_TIMEOUT_SECS,
                    http::DEFAULT_CONNECT_TIMEOUT_SECS,
                )?,
            },
            credentials_path,
            environment: Environment::from_str_or_default(
                &env::var(env_config::ENVIRONMENT).unwrap_or_default(),
            ),
            log_level: LogLevel::from_str_or_default(&env::var("RUST_LOG").unwrap_or_default()),
        };

        if config.environment.is_production() && config.api_base_url.scheme() != "https" {
            warn!(
                "Production environment configured with non-HTTPS API base URL {}",
                config.api_base_url
            );
        }

        Ok(config)
    }

    /// Log a one-line summary of the effective configuration
    pub fn log_summary(&self) {
        info!(
            api.base_url = %self.api_base_url,
            http.timeout_secs = self.http.timeout_secs,
            http.connect_timeout_secs = self.http.connect_timeout_secs,
            credentials.path = %self.credentials_path.display(),
            environment = %self.environment,
            "Client configuration loaded"
        );
    }
}

/// Parse and validate the API base URL
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        key: env_config::API_BASE_URL,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            key: env_config::API_BASE_URL,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// `<config dir>/gameshelf/credentials.json`
fn default_credentials_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| {
            dir.join(storage::APP_DIR_NAME)
                .join(storage::CREDENTIALS_FILE_NAME)
        })
        .ok_or(ConfigError::NoConfigDir(env_config::CREDENTIALS_PATH))
}

fn env_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|e| ConfigError::Invalid {
            key,
            reason: format!("{e}"),
        }),
        Err(_) => Ok(default),
    }
}
