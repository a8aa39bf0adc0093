//! Client configuration loaded from the environment.

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Configuration shared by the service clients.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. Environment variables with `GOVKIT_` prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Domain the service endpoints live under (`https://{service}.{app_domain}`).
    #[serde(default = "default_app_domain")]
    pub app_domain: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token attached to every request when set.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

fn default_app_domain() -> String {
    "test.gov.uk".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout_secs() -> u64 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_domain: default_app_domain(),
            timeout_secs: default_timeout_secs(),
            bearer_token: None,
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("GOVKIT_"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_domain.is_empty() {
            return Err(ConfigError::Validation(
                "app_domain is required. Set GOVKIT_APP_DOMAIN or accept the default.".into(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation("timeout_secs cannot be 0".into()));
        }

        Ok(())
    }
}
