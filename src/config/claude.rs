use std::env;

/// Claude API credentials.
///
/// Consumed by the planned document analysis pipeline in
/// [`crate::modules::documents`]. Until that lands, the key is only carried
/// in configuration; an empty key means the integration is unconfigured.
#[derive(Clone, Debug)]
pub struct ClaudeConfig {
    pub api_key: String,
}

impl ClaudeConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("CLAUDE_API_KEY").unwrap_or_else(|_| "".to_string()),
        }
    }
}
