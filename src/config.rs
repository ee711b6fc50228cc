//! Client configuration
//!
//! A [`ClientConfig`] names the API host, the region to address and the
//! access token sent with every request. It can be built in code, loaded
//! from a YAML file or read from the environment.

use crate::error::{Error, Result};
use crate::types::{DEMO_APP_ACCESS_TOKEN, DEMO_DOMAIN, PRODUCTION_DOMAIN};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the base URL
pub const ENV_BASE_URL: &str = "STALCRAFT_BASE_URL";

/// Environment variable holding the region
pub const ENV_REGION: &str = "STALCRAFT_REGION";

/// Environment variable holding the access token
pub const ENV_TOKEN: &str = "STALCRAFT_TOKEN";

/// Configuration for the API client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the API, e.g. `https://eapi.stalcraft.net`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Region identifier, e.g. `EU`
    #[serde(default)]
    pub region: String,

    /// Bearer token (application or user)
    #[serde(default)]
    pub access_token: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    format!("https://{PRODUCTION_DOMAIN}")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("stalcraft/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            region: String::new(),
            access_token: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("region", &self.region)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Production API for the given region
    pub fn production(region: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Demo API for the given region, using the public demo application token
    pub fn demo(region: impl Into<String>) -> Self {
        Self {
            base_url: format!("https://{DEMO_DOMAIN}"),
            region: region.into(),
            access_token: DEMO_APP_ACCESS_TOKEN.to_string(),
            ..Self::default()
        }
    }

    /// Load a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Overlay values from `STALCRAFT_*` environment variables
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from `STALCRAFT_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    pub(crate) fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base_url) = var(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(region) = var(ENV_REGION).filter(|v| !v.is_empty()) {
            self.region = region;
        }
        if let Some(token) = var(ENV_TOKEN).filter(|v| !v.is_empty()) {
            self.access_token = token;
        }
        self
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the config and parse the base URL
    pub fn validate(&self) -> Result<Url> {
        if self.region.is_empty() {
            return Err(Error::config("no region provided"));
        }
        if self.access_token.is_empty() {
            return Err(Error::config("no access token provided"));
        }
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL '{}' cannot carry a path",
                self.base_url
            )));
        }
        Ok(url)
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the region
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = region.into();
        self
    }

    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = token.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
