use std::env;

/// Vultr object storage (S3-compatible) credentials.
///
/// Will back document uploads once [`crate::modules::documents`] lands.
/// Empty fields mean the bucket is unconfigured.
#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}

impl ObjectStorageConfig {
    pub fn from_env() -> Self {
        Self {
            access_key: env::var("VULTR_OBJECT_STORAGE_ACCESS_KEY")
                .unwrap_or_else(|_| "".to_string()),
            secret_key: env::var("VULTR_OBJECT_STORAGE_SECRET_KEY")
                .unwrap_or_else(|_| "".to_string()),
            bucket: env::var("VULTR_OBJECT_STORAGE_BUCKET").unwrap_or_else(|_| "".to_string()),
        }
    }
}
