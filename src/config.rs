use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated list of origins allowed to make credentialed CORS requests
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        match Self::from_vars(std::env::vars()) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    /// Build configuration from an explicit set of variables instead of the process environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Origins on the CORS allow-list, trimmed, with empty entries dropped
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable error: {0}")]
    Env(#[from] envy::Error),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> String {
    "http://localhost:5173,http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let config = Config::default();
        assert_eq!(config.server_address(), "0.0.0.0:8000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn defaults_allow_local_dev_origins() {
        assert_eq!(
            Config::default().allowed_origins(),
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }

    #[test]
    fn empty_environment_matches_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.server_address(), Config::default().server_address());
        assert_eq!(config.allowed_origins(), Config::default().allowed_origins());
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("CORS_ORIGINS", "https://capymorph.example"),
        ]))
        .unwrap();
        assert_eq!(config.server_address(), "127.0.0.1:9090");
        assert_eq!(config.allowed_origins(), vec!["https://capymorph.example"]);
    }

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let config = Config {
            cors_origins: " http://a.test , ,http://b.test,".to_string(),
            ..Config::default()
        };
        assert_eq!(config.allowed_origins(), vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_vars(vars(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env(_)));
    }
}
