//! Client configuration.

use std::env;

use thiserror::Error;
use tienda_commerce::Currency;

const ENV_STORE_ID: &str = "TIENDANUBE_STORE_ID";
const ENV_ACCESS_TOKEN: &str = "TIENDANUBE_ACCESS_TOKEN";
const ENV_API_URL: &str = "TIENDANUBE_API_URL";
const ENV_STORE_URL: &str = "TIENDANUBE_STORE_URL";

const DEFAULT_USER_AGENT: &str = "tienda-storefront";

/// Raised when the environment is missing required settings.
#[derive(Error, Debug)]
#[error("Tiendanube configuration is incomplete: missing {missing:?}")]
pub struct ConfigError {
    /// Names of the unset environment variables.
    pub missing: Vec<&'static str>,
}

/// Connection settings for the platform API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Numeric store identifier, part of every endpoint URL.
    pub store_id: String,
    /// API access token, sent on every request.
    pub access_token: String,
    /// API root (e.g., "https://api.tiendanube.com/v1").
    pub api_url: String,
    /// Public storefront URL, used for checkout permalinks.
    pub store_url: Option<String>,
    /// Currency prices are ingested with.
    pub currency: Currency,
    /// User-Agent header value; the platform requires one identifying
    /// the integration.
    pub user_agent: String,
}

impl ClientConfig {
    /// Build a configuration with explicit values.
    pub fn new(
        store_id: impl Into<String>,
        access_token: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            access_token: access_token.into(),
            api_url: api_url.into(),
            store_url: None,
            currency: Currency::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the public storefront URL.
    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store_url = Some(url.into());
        self
    }

    /// Set the ingestion currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Read the configuration from the environment.
    ///
    /// The error lists every missing variable at once, not just the
    /// first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_id = env::var(ENV_STORE_ID).ok();
        let access_token = env::var(ENV_ACCESS_TOKEN).ok();
        let api_url = env::var(ENV_API_URL).ok();

        let mut missing = Vec::new();
        if store_id.is_none() {
            missing.push(ENV_STORE_ID);
        }
        if access_token.is_none() {
            missing.push(ENV_ACCESS_TOKEN);
        }
        if api_url.is_none() {
            missing.push(ENV_API_URL);
        }

        match (store_id, access_token, api_url) {
            (Some(store_id), Some(access_token), Some(api_url)) => {
                let mut config = Self::new(store_id, access_token, api_url);
                config.store_url = env::var(ENV_STORE_URL).ok();
                Ok(config)
            }
            _ => Err(ConfigError { missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = ClientConfig::new("12345", "token", "https://api.tiendanube.com/v1")
            .with_store_url("https://tienda.example.com")
            .with_currency(Currency::ARS);

        assert_eq!(config.store_id, "12345");
        assert_eq!(config.store_url.as_deref(), Some("https://tienda.example.com"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_from_env_reports_all_missing_variables() {
        env::remove_var(ENV_STORE_ID);
        env::remove_var(ENV_ACCESS_TOKEN);
        env::remove_var(ENV_API_URL);

        let error = ClientConfig::from_env().unwrap_err();
        assert_eq!(
            error.missing,
            vec![ENV_STORE_ID, ENV_ACCESS_TOKEN, ENV_API_URL]
        );
    }
}
