use serde::{Deserialize, Serialize};
use std::env;

/// Connection settings for a client: where to talk to and how patiently.
///
/// The configuration is plain data. It is consumed when a client is built;
/// changing a config value afterwards never affects an existing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every resource path is resolved against.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// User agent header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default timeout
    /// and user agent.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_seconds: 30,
            user_agent: format!("restkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_BASE_URL` (required)
    /// - `{PREFIX}_TIMEOUT_SECONDS` (optional, defaults to 30)
    /// - `{PREFIX}_USER_AGENT` (optional)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let base_url_var = format!("{}_BASE_URL", prefix.to_uppercase());
        let timeout_var = format!("{}_TIMEOUT_SECONDS", prefix.to_uppercase());
        let user_agent_var = format!("{}_USER_AGENT", prefix.to_uppercase());

        let base_url = env::var(&base_url_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(base_url_var))?;

        let mut config = Self::new(base_url);

        if let Ok(timeout) = env::var(&timeout_var) {
            config.timeout_seconds = timeout.parse().map_err(|_| {
                ConfigError::InvalidConfiguration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    timeout_var, timeout
                ))
            })?;
        }

        if let Ok(user_agent) = env::var(&user_agent_var) {
            config.user_agent = user_agent;
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied() {
        let config = ClientConfig::new("https://api.example.com".to_string());
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("restkit/"));
    }

    #[test]
    fn from_env_requires_base_url() {
        env::remove_var("RESTKIT_CFG_MISSING_BASE_URL");
        let err = ClientConfig::from_env("restkit_cfg_missing").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvironmentVariable(var)
            if var == "RESTKIT_CFG_MISSING_BASE_URL"));
    }

    #[test]
    fn from_env_reads_optional_settings() {
        env::set_var("RESTKIT_CFG_FULL_BASE_URL", "https://api.example.com");
        env::set_var("RESTKIT_CFG_FULL_TIMEOUT_SECONDS", "5");
        env::set_var("RESTKIT_CFG_FULL_USER_AGENT", "integration-suite/2");

        let config = ClientConfig::from_env("restkit_cfg_full").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.user_agent, "integration-suite/2");

        env::remove_var("RESTKIT_CFG_FULL_BASE_URL");
        env::remove_var("RESTKIT_CFG_FULL_TIMEOUT_SECONDS");
        env::remove_var("RESTKIT_CFG_FULL_USER_AGENT");
    }

    #[test]
    fn from_env_rejects_bad_timeout() {
        env::set_var("RESTKIT_CFG_BAD_BASE_URL", "https://api.example.com");
        env::set_var("RESTKIT_CFG_BAD_TIMEOUT_SECONDS", "soon");

        let err = ClientConfig::from_env("restkit_cfg_bad").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration(_)));

        env::remove_var("RESTKIT_CFG_BAD_BASE_URL");
        env::remove_var("RESTKIT_CFG_BAD_TIMEOUT_SECONDS");
    }
}
