use crate::config::app::AppConfig;
use crate::config::claude::ClaudeConfig;
use crate::config::cors::CorsConfig;
use crate::config::database::DatabaseConfig;
use crate::config::raindrop::RaindropConfig;
use crate::config::storage::ObjectStorageConfig;

/// Shared application state, cloned into every handler.
///
/// Holds only immutable configuration today; connection pools and service
/// clients join it as the feature modules land.
#[derive(Clone, Debug)]
pub struct AppState {
    pub app_config: AppConfig,
    pub cors_config: CorsConfig,
    pub claude_config: ClaudeConfig,
    pub raindrop_config: RaindropConfig,
    pub database_config: DatabaseConfig,
    pub storage_config: ObjectStorageConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        app_config: AppConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        claude_config: ClaudeConfig::from_env(),
        raindrop_config: RaindropConfig::from_env(),
        database_config: DatabaseConfig::from_env(),
        storage_config: ObjectStorageConfig::from_env(),
    }
}
