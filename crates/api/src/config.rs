//! Application configuration loaded from environment variables.

use std::str::FromStr;
use std::time::Duration;

use cart_store::DatabaseConfig;

/// Which store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `SERVER_PORT`, or `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `text` or `json` (default: `text`)
/// - `REQUEST_TIMEOUT_SECS` — per-request deadline (default: `30`)
/// - `STORAGE_BACKEND` — `postgres` or `memory` (default: `postgres`)
/// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`,
///   `DB_MAX_CONNECTIONS` — PostgreSQL connection settings
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub request_timeout: Duration,
    pub storage: StorageBackend,
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database = DatabaseConfig {
            host: lookup("DB_HOST").unwrap_or(defaults.database.host),
            port: parse_var(&lookup, "DB_PORT").unwrap_or(defaults.database.port),
            user: lookup("DB_USER").unwrap_or(defaults.database.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.database.password),
            name: lookup("DB_NAME").unwrap_or(defaults.database.name),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.database.max_connections),
        };

        let storage = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("memory") => StorageBackend::Memory,
            _ => defaults.storage,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => defaults.log_format,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "SERVER_PORT")
                .or_else(|| parse_var(&lookup, "PORT"))
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
            request_timeout: parse_var(&lookup, "REQUEST_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            storage,
            database,
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            request_timeout: Duration::from_secs(30),
            storage: StorageBackend::Postgres,
            database: DatabaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.storage, StorageBackend::Postgres);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_lookup_yields_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_reads_database_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6432"),
            ("DB_USER", "cart"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "shop"),
            ("DB_MAX_CONNECTIONS", "12"),
        ]));
        assert_eq!(config.database.host, "db");
        assert_eq!(config.database.port, 6432);
        assert_eq!(config.database.user, "cart");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "shop");
        assert_eq!(config.database.max_connections, 12);
    }

    #[test]
    fn test_server_port_takes_precedence_over_port() {
        let config = Config::from_lookup(lookup_from(&[("SERVER_PORT", "9000"), ("PORT", "8000")]));
        assert_eq!(config.port, 9000);

        let config = Config::from_lookup(lookup_from(&[("PORT", "8000")]));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("REQUEST_TIMEOUT_SECS", "-1"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_backend_and_log_format() {
        let config = Config::from_lookup(lookup_from(&[
            ("STORAGE_BACKEND", "Memory"),
            ("LOG_FORMAT", "json"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        let config = Config::from_lookup(lookup_from(&[("STORAGE_BACKEND", "sqlite")]));
        assert_eq!(config.storage, StorageBackend::Postgres);
    }
}
