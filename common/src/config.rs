//! Process configuration.
//!
//! Everything is read once from the environment at startup and never
//! mutated afterwards.

use std::fmt;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Names of the variables holding the Aurora Vision credentials and endpoints.
pub const AURORA_VARS: [&str; 6] = [
    "API_USER",
    "API_PASSWORD",
    "API_KEY",
    "API_AUTH_URL",
    "API_BASE_URL",
    "API_ENTITY_ID",
];

/// Listener configuration for a service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub service_name: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Loads the listener configuration from `HOST` and `PORT`.
    pub fn load_with_service(service_name: impl Into<String>) -> Self {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// A missing or unparsable `PORT` falls back to 5000.
    pub fn from_lookup<F>(service_name: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_name: service_name.into(),
            host: lookup("HOST")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Credentials and endpoints for the Aurora Vision API.
///
/// Missing values are kept as empty strings. They are not rejected here; an
/// incomplete configuration shows up as a malformed outbound URL or an
/// upstream authentication failure.
#[derive(Clone, Default)]
pub struct AuroraConfig {
    pub username: String,
    pub password: String,
    pub api_key: String,
    pub auth_url: String,
    pub base_url: String,
    pub entity_id: String,
}

impl AuroraConfig {
    /// Loads the credentials from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            username: get("API_USER"),
            password: get("API_PASSWORD"),
            api_key: get("API_KEY"),
            auth_url: get("API_AUTH_URL"),
            base_url: get("API_BASE_URL"),
            entity_id: get("API_ENTITY_ID"),
        }
    }

    /// Names of the variables that resolved to an empty value.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let values = [
            &self.username,
            &self.password,
            &self.api_key,
            &self.auth_url,
            &self.base_url,
            &self.entity_id,
        ];
        AURORA_VARS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}

impl fmt::Debug for AuroraConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuroraConfig")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("api_key", &"[redacted]")
            .field("auth_url", &self.auth_url)
            .field("base_url", &self.base_url)
            .field("entity_id", &self.entity_id)
            .finish()
    }
}
