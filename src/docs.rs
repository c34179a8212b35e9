use utoipa::OpenApi;

use crate::modules::health::model::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(crate::modules::health::controller::health_check),
    components(schemas(HealthResponse)),
    tags(
        (name = "Health", description = "Service health endpoints")
    ),
    info(
        title = "MedicalDocAI",
        description = "Medical Document AI Assistant Backend Service",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
