//! Service Hub
//!
//! Owns the configured store API client and hands clones to the state layer.

use crate::api::StoreApi;
use crate::constants::{API_URL_ENV, DEFAULT_API_BASE_URL};
use tracing::info;

/// Configuration for all services
#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    /// Base URL from the config file, if any
    pub api_base_url: Option<String>,
}

impl ServiceConfig {
    /// Effective base URL: environment, then config file, then the default
    pub fn resolve_base_url(&self, env_override: Option<String>) -> String {
        [env_override, self.api_base_url.clone()]
            .into_iter()
            .flatten()
            .map(|url| url.trim().to_string())
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }
}

/// Central hub for backend services
#[derive(Clone, Debug)]
pub struct ServiceHub {
    store: StoreApi,
}

impl ServiceHub {
    /// Create a new service hub with the given configuration
    pub fn new(config: &ServiceConfig) -> Self {
        let base_url = config.resolve_base_url(std::env::var(API_URL_ENV).ok());
        info!(base_url = %base_url, "Store API configured");
        Self {
            store: StoreApi::new(&base_url),
        }
    }

    /// Client for the shop backend
    pub fn store(&self) -> &StoreApi {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_precedence() {
        let config = ServiceConfig {
            api_base_url: Some("http://config:1".to_string()),
        };
        assert_eq!(
            config.resolve_base_url(Some("http://env:2".to_string())),
            "http://env:2"
        );
        assert_eq!(config.resolve_base_url(Some("  ".to_string())), "http://config:1");
        assert_eq!(
            ServiceConfig::default().resolve_base_url(None),
            DEFAULT_API_BASE_URL
        );
    }

    #[test]
    fn test_hub_exposes_store() {
        let hub = ServiceHub::new(&ServiceConfig {
            api_base_url: Some("http://localhost:9/".to_string()),
        });
        assert!(hub.store().base_url().starts_with("http"));
    }
}
