//! Runtime configuration from environment variables (after `dotenvy`).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Enforce referential constraints in the store. Off by default so deletes leave
    /// orphaned references behind instead of failing.
    pub foreign_keys: bool,
    pub body_limit_bytes: usize,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: "0.0.0.0".into(),
            port: 3000,
            max_connections: 5,
            foreign_keys: false,
            body_limit_bytes: 1024 * 1024,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `DATABASE_URL`       | `sqlite:///tmp/test.db` |
    /// | `HOST`               | `0.0.0.0`               |
    /// | `PORT`               | `3000`                  |
    /// | `DB_MAX_CONNECTIONS` | `5`                     |
    /// | `FOREIGN_KEYS`       | `false`                 |
    /// | `BODY_LIMIT_BYTES`   | `1048576`               |
    /// | `CORS_ORIGINS`       | `*`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.database_url);
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", lookup("PORT"), defaults.port)?;
        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            defaults.max_connections,
        )?;
        let foreign_keys = match lookup("FOREIGN_KEYS") {
            Some(v) => parse_bool("FOREIGN_KEYS", &v)?,
            None => defaults.foreign_keys,
        };
        let body_limit_bytes = parse_or(
            "BODY_LIMIT_BYTES",
            lookup("BODY_LIMIT_BYTES"),
            defaults.body_limit_bytes,
        )?;
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty() && s != "*")
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            foreign_keys,
            body_limit_bytes,
            cors_origins,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
