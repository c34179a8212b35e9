use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving requests.
    #[schema(example = "ok")]
    pub status: String,
}
