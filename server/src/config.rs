//! Configuration management for the server.

use lexorder_engine::{SymbolTable, BASE62};
use std::env;

/// Default cap on keys generated by one request.
const DEFAULT_MAX_COUNT: usize = 1000;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Most keys a single request may ask for
    pub max_count: usize,
    /// Alphabet for general requests that do not name one
    pub alphabet: SymbolTable,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let max_count = match var("LEXORDER_MAX_COUNT") {
            Some(value) => match value.parse() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxCount),
            },
            None => DEFAULT_MAX_COUNT,
        };

        let alphabet = var("LEXORDER_ALPHABET").unwrap_or_else(|| BASE62.to_string());
        let alphabet = SymbolTable::new(&alphabet).map_err(ConfigError::InvalidAlphabet)?;

        Ok(Self {
            host,
            port,
            max_count,
            alphabet,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("LEXORDER_MAX_COUNT must be a positive integer")]
    InvalidMaxCount,

    #[error("Invalid LEXORDER_ALPHABET: {0}")]
    InvalidAlphabet(lexorder_engine::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_count, 1000);
        assert_eq!(config.alphabet, SymbolTable::base62());
    }

    #[test]
    fn overrides() {
        let config = Config::from_vars(vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LEXORDER_MAX_COUNT", "50"),
            ("LEXORDER_ALPHABET", "0123456789"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_count, 50);
        assert_eq!(config.alphabet, SymbolTable::decimal());
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            Config::from_vars(vars(&[("PORT", "http")])),
            Err(ConfigError::InvalidPort)
        ));
        assert!(matches!(
            Config::from_vars(vars(&[("LEXORDER_MAX_COUNT", "0")])),
            Err(ConfigError::InvalidMaxCount)
        ));
        assert!(matches!(
            Config::from_vars(vars(&[("LEXORDER_ALPHABET", "aab")])),
            Err(ConfigError::InvalidAlphabet(_))
        ));
    }
}
