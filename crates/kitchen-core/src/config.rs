//! API configuration - base URL, endpoint table and request timeout
//!
//! Values come from built-in defaults per environment and can be overridden
//! through environment variables:
//!
//! - `KITCHEN_ENV` - `production` (or `prod`) selects the hosted backend,
//!   anything else the local development server
//! - `KITCHEN_API_URL` - explicit base URL, wins over the environment default
//! - `KITCHEN_TIMEOUT_MS` - per-request timeout in milliseconds

use std::time::Duration;

use crate::error::{Error, Result};

pub const ENV_VAR: &str = "KITCHEN_ENV";
pub const API_URL_VAR: &str = "KITCHEN_API_URL";
pub const TIMEOUT_VAR: &str = "KITCHEN_TIMEOUT_MS";

const DEVELOPMENT_BASE_URL: &str = "http://localhost:8080/api";
const PRODUCTION_BASE_URL: &str = "https://your-backend-url.com/api";

/// Request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Deployment environment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl From<&str> for Environment {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Endpoint paths, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub login: String,
    pub signup: String,
    pub logout: String,
    pub recipes: String,
    pub user_recipes: String,
    pub search_recipes: String,
    pub pantry: String,
    pub pantry_items: String,
    pub stores: String,
    pub comments: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/auth/login".to_string(),
            signup: "/auth/signup".to_string(),
            logout: "/auth/logout".to_string(),
            recipes: "/recipes".to_string(),
            user_recipes: "/recipes/user".to_string(),
            search_recipes: "/recipes/search".to_string(),
            pantry: "/pantry".to_string(),
            pantry_items: "/pantry/items".to_string(),
            stores: "/stores".to_string(),
            comments: "/comments".to_string(),
        }
    }
}

impl Endpoints {
    /// `/recipes/{id}`
    pub fn recipe(&self, id: &str) -> String {
        format!("{}/{}", self.recipes, id)
    }

    /// `/pantry/items/{id}`
    pub fn pantry_item(&self, id: &str) -> String {
        format!("{}/{}", self.pantry_items, id)
    }

    /// `/stores/{id}/items`
    pub fn store_items(&self, store_id: &str) -> String {
        format!("{}/{}/items", self.stores, store_id)
    }
}

/// Everything the gateway needs to reach the backend
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub endpoints: Endpoints,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl ApiConfig {
    pub fn for_environment(env: Environment) -> Self {
        Self {
            base_url: env.base_url().to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            endpoints: Endpoints::default(),
        }
    }

    /// Point the client at a specific backend
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup(ENV_VAR)
            .map(|v| Environment::from(v.as_str()))
            .unwrap_or_default();
        let mut config = Self::for_environment(env);

        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                Error::config(format!(
                    "{} must be a number of milliseconds, got '{}'",
                    TIMEOUT_VAR, raw
                ))
            })?;
            config = config.with_timeout(Duration::from_millis(millis));
        }

        log::debug!(
            "[config] Using base URL {} ({:?}), timeout {:?}",
            config.base_url,
            env,
            config.timeout
        );

        Ok(config)
    }

    /// Full URL for an endpoint (plain concatenation)
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}
