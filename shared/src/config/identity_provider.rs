//! Identity provider (management API) configuration

use serde::{Deserialize, Serialize};

use super::{parsed_var, required_var};
use crate::errors::ConfigError;

/// Credentials and endpoints for the identity provider's management API
#[derive(Clone, Deserialize, Serialize)]
pub struct IdentityProviderConfig {
    /// Tenant domain, e.g. `tenant.us.auth0.com` (no scheme)
    pub domain: String,

    /// Machine-to-machine client id
    pub client_id: String,

    /// Machine-to-machine client secret
    pub client_secret: String,

    /// Token audience; defaults to `https://{domain}/api/v2/`
    pub audience: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl IdentityProviderConfig {
    /// Build a configuration with the default audience and timeout
    pub fn new(
        domain: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let domain = normalize_domain(&domain.into());
        Self {
            audience: default_audience(&domain),
            domain,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            request_timeout_secs: 5,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(
            required_var("IDP_DOMAIN")?,
            required_var("IDP_CLIENT_ID")?,
            required_var("IDP_CLIENT_SECRET")?,
        );

        if let Ok(audience) = std::env::var("IDP_AUDIENCE") {
            if !audience.trim().is_empty() {
                config.audience = audience.trim().to_string();
            }
        }
        config.request_timeout_secs = parsed_var("IDP_REQUEST_TIMEOUT_SECS", 5)?;

        Ok(config)
    }

    /// Base URL of the tenant, e.g. `https://tenant.us.auth0.com`
    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityProviderConfig")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("audience", &self.audience)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn normalize_domain(domain: &str) -> String {
    domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}

fn default_audience(domain: &str) -> String {
    format!("https://{}/api/v2/", domain)
}
