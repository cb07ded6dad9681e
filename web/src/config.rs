//! Configuration management for the todo lists server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Call `dotenvy::dotenv()` first if a `.env` file should be honoured.

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Session cookie configuration
    pub session: SessionConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Days of inactivity after which a session expires
    pub max_age_days: i64,
    /// Only send the cookie over HTTPS
    pub secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "todolists-session-id".to_string(),
            max_age_days: 31,
            secure: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// `lookup` returns the raw value of a variable, or `None` when unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or(defaults.server.host),
                port: parse(lookup("PORT")).unwrap_or(defaults.server.port),
            },
            session: SessionConfig {
                cookie_name: lookup("SESSION_COOKIE_NAME")
                    .unwrap_or(defaults.session.cookie_name),
                max_age_days: parse::<i64>(lookup("SESSION_MAX_AGE_DAYS"))
                    .filter(|days| *days > 0)
                    .unwrap_or(defaults.session.max_age_days),
                secure: parse(lookup("SESSION_SECURE")).unwrap_or(defaults.session.secure),
            },
        }
    }

    /// `host:port` the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.session.cookie_name, "todolists-session-id");
        assert_eq!(config.session.max_age_days, 31);
        assert!(!config.session.secure);
    }

    #[test]
    fn test_values_are_read() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("SESSION_COOKIE_NAME", "sid"),
            ("SESSION_MAX_AGE_DAYS", "7"),
            ("SESSION_SECURE", "true"),
        ]);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.session.cookie_name, "sid");
        assert_eq!(config.session.max_age_days, 7);
        assert!(config.session.secure);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = config_from(&[
            ("PORT", "abc"),
            ("SESSION_MAX_AGE_DAYS", "0"),
            ("SESSION_SECURE", "yes"),
        ]);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.session.max_age_days, 31);
        assert!(!config.session.secure);

        let negative = config_from(&[("SESSION_MAX_AGE_DAYS", "-3")]);
        assert_eq!(negative.session.max_age_days, 31);
    }
}
