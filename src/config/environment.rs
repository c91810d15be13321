// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Environment-based configuration management for production deployment

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use capsule_core::constants::ports;
use capsule_core::errors::{AppError, AppResult};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose debugging output
    Debug,
    /// Everything, including per-candidate detail
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated testing
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// Sqlite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory sqlite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a `sqlite:` URL string
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-sqlite URLs.
    pub fn parse_url(s: &str) -> AppResult<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else {
            Err(AppError::config(format!(
                "unsupported database URL '{s}': only sqlite: URLs are supported"
            )))
        }
    }

    /// Connection string for the sqlx driver
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Database configuration
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `HTTP_PORT`: listen port (default 8084)
    /// - `ENVIRONMENT`: development | production | testing
    /// - `LOG_LEVEL`: error | warn | info | debug | trace
    /// - `DATABASE_URL`: `sqlite:<path>` or `sqlite::memory:`
    ///   (default `sqlite:data/capsule.db`)
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is present but invalid.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| {
                AppError::config(format!("HTTP_PORT '{value}' is not a valid port"))
            })?,
            Err(_) => ports::DEFAULT_HTTP_PORT,
        };

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );
        let log_level =
            LogLevel::from_str_or_default(&env::var("LOG_LEVEL").unwrap_or_default());

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:data/capsule.db".to_owned());
        let database = DatabaseConfig {
            url: DatabaseUrl::parse_url(&database_url)?,
        };

        Ok(Self {
            http_port,
            environment,
            log_level,
            database,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} port={} log_level={} database={}",
            self.environment,
            self.http_port,
            self.log_level,
            self.database.url.to_connection_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sqlite_urls() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").ok(),
            Some(DatabaseUrl::Memory)
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:data/capsule.db").ok(),
            Some(DatabaseUrl::SQLite {
                path: PathBuf::from("data/capsule.db")
            })
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/capsule").is_err());
    }

    #[test]
    fn connection_string_round_trips() {
        let url = DatabaseUrl::SQLite {
            path: PathBuf::from("data/capsule.db"),
        };
        assert_eq!(url.to_connection_string(), "sqlite:data/capsule.db");
        assert_eq!(DatabaseUrl::Memory.to_connection_string(), "sqlite::memory:");
    }

    #[test]
    fn unknown_enum_values_fall_back_to_defaults() {
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
        assert_eq!(LogLevel::from_str_or_default("loud"), LogLevel::Info);
    }
}
