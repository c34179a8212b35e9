use std::env;

/// Raindrop API credentials.
///
/// Consumed by the planned bookmark synchronization in
/// [`crate::modules::bookmarks`]. An empty key means the integration is
/// unconfigured.
#[derive(Clone, Debug)]
pub struct RaindropConfig {
    pub api_key: String,
}

impl RaindropConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("RAINDROP_API_KEY").unwrap_or_else(|_| "".to_string()),
        }
    }
}
