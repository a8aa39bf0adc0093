//! Service endpoint discovery.
//!
//! Service base URLs follow the `https://{service}.{app_domain}` platform
//! convention. A per-service environment variable
//! (`GOVKIT_SERVICE_<NAME>_URI`, with hyphens written as underscores) wins
//! over the convention, which is how development environments point a single
//! service somewhere else.

use crate::config::Config;

/// Service name of the content catalog API.
pub const CONTENT_API: &str = "contentapi";
/// Service name of the collections API.
pub const COLLECTIONS_API: &str = "collections-api";
/// Service name of the places search API.
pub const IMMINENCE_API: &str = "imminence";
/// Service name of the fact lookup API.
pub const FACT_CAVE: &str = "fact-cave";
/// Service name of the account session API.
pub const ACCOUNT_API: &str = "account-api";

/// Resolves service names to base URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    app_domain: String,
}

impl Endpoints {
    /// Create a resolver for the given application domain.
    #[must_use]
    pub fn new(app_domain: impl Into<String>) -> Self {
        Self {
            app_domain: app_domain.into(),
        }
    }

    /// Create a resolver from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app_domain.clone())
    }

    /// Base URL for `service`, honoring any per-service override.
    #[must_use]
    pub fn find(&self, service: &str) -> String {
        let var = format!(
            "GOVKIT_SERVICE_{}_URI",
            service.to_uppercase().replace('-', "_")
        );
        if let Ok(uri) = std::env::var(&var) {
            if !uri.is_empty() {
                return uri;
            }
        }

        format!("https://{}.{}", service.to_lowercase(), self.app_domain)
    }
}
