use medical_doc_ai::config::app::AppConfig;
use medical_doc_ai::config::claude::ClaudeConfig;
use medical_doc_ai::config::cors::CorsConfig;
use medical_doc_ai::config::database::DatabaseConfig;
use medical_doc_ai::config::raindrop::RaindropConfig;
use medical_doc_ai::config::storage::ObjectStorageConfig;
use medical_doc_ai::state::AppState;

/// Builds an `AppState` with explicit values, independent of the process
/// environment, so tests never race on environment variables.
#[allow(dead_code)]
pub fn test_state(api_prefix: &str, cors_origins: &str) -> AppState {
    AppState {
        app_config: AppConfig {
            name: "MedicalDocAI".to_string(),
            env: "test".to_string(),
            api_prefix: api_prefix.to_string(),
        },
        cors_config: CorsConfig {
            origins: cors_origins.to_string(),
        },
        claude_config: ClaudeConfig {
            api_key: String::new(),
        },
        raindrop_config: RaindropConfig {
            api_key: String::new(),
        },
        database_config: DatabaseConfig { url: String::new() },
        storage_config: ObjectStorageConfig {
            access_key: String::new(),
            secret_key: String::new(),
            bucket: String::new(),
        },
    }
}
