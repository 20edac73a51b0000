use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),
    #[error("PORT is not in the correct format: {0}")]
    InvalidPort(String),
    #[error("SEED_DATA must be true or false, got {0}")]
    InvalidSeedFlag(String),
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// Start with the championship fixtures instead of an empty store
    pub seed_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: Ipv4Addr = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => Ipv4Addr::LOCALHOST,
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };

        let seed_data = match lookup("SEED_DATA") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidSeedFlag(raw)),
            },
            None => true,
        };

        Ok(Self {
            addr: SocketAddr::from((host, port)),
            seed_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8000".parse::<SocketAddr>().unwrap());
        assert!(config.seed_data);
    }

    #[test]
    fn reads_host_port_and_seed_flag() {
        let config = config_from(&[("HOST", "0.0.0.0"), ("PORT", "3000"), ("SEED_DATA", "false")]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert!(!config.seed_data);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(config_from(&[("HOST", "localhost")]), Err(ConfigError::InvalidHost(_))));
        assert!(matches!(config_from(&[("PORT", "99999")]), Err(ConfigError::InvalidPort(_))));
        assert!(matches!(config_from(&[("SEED_DATA", "maybe")]), Err(ConfigError::InvalidSeedFlag(_))));
    }
}
