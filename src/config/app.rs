use std::env;

/// Application identity and routing configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Human-readable application name, reported in logs.
    pub name: String,
    /// Deployment environment name (e.g. `local`, `staging`, `production`).
    pub env: String,
    /// Path prefix the API router is mounted under.
    pub api_prefix: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            name: env::var("APP_NAME").unwrap_or_else(|_| "MedicalDocAI".to_string()),
            env: env::var("ENV").unwrap_or_else(|_| "local".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
