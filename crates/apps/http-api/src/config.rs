use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the service reads from its environment, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: Duration,
    pub env_type: String,
    pub migration_path: PathBuf,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, applying defaults for absent keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                get("DB_USER", "admin"),
                get("DB_PASSWORD", "admin"),
                get("DB_HOST", "localhost"),
                parse::<u16>("DB_PORT", get("DB_PORT", "5432"), "a port number")?,
                get("DB_NAME", "postgres"),
            ),
        };

        let database = DatabaseConfig {
            url,
            max_connections: parse(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS", "20"),
                "a positive integer",
            )?,
            connect_timeout: parse_duration(
                "DB_CONNECT_TIMEOUT",
                get("DB_CONNECT_TIMEOUT", "5s"),
            )?,
        };

        let server = ServerConfig {
            host: get("SERVER_HOST", "0.0.0.0"),
            port: parse("SERVER_PORT", get("SERVER_PORT", "8080"), "a port number")?,
            shutdown_timeout: parse_duration("SHUTDOWN_TIMEOUT", get("SHUTDOWN_TIMEOUT", "5s"))?,
            env_type: get("ENV_TYPE", "local"),
            migration_path: PathBuf::from(get("MIGRATION_PATH", "./migrations")),
        };

        Ok(AppConfig { database, server })
    }
}

fn parse<T: std::str::FromStr>(
    key: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value,
        expected,
    })
}

/// Parse a duration such as `500ms`, `1m30s`, `1.5s`, `1h`, or a bare number of seconds
fn parse_duration(key: &'static str, value: String) -> Result<Duration, ConfigError> {
    let trimmed = value.trim();

    if let Ok(secs) = trimmed.parse::<f64>() {
        return Duration::try_from_secs_f64(secs).map_err(|_| invalid_duration(key, &value));
    }
    if let Ok(duration) = humantime::parse_duration(trimmed) {
        return Ok(duration);
    }
    fractional_duration(trimmed).ok_or_else(|| invalid_duration(key, &value))
}

/// A single fractional amount with one unit, e.g. `1.5s` or `0.25h`
fn fractional_duration(value: &str) -> Option<Duration> {
    let split = value.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
    let (amount, unit) = value.split_at(split);
    if !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let amount: f64 = amount.parse().ok()?;
    let unit = humantime::parse_duration(&format!("1{unit}")).ok()?;
    Duration::try_from_secs_f64(amount * unit.as_secs_f64()).ok()
}

fn invalid_duration(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        expected: "a duration such as 500ms, 1m30s or 1.5s",
    }
}
