use axum::{Router, middleware};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::cors::cors_layer;
use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::health::router::init_health_router;
use crate::state::AppState;

/// Router for the versioned API surface, mounted under the configured
/// prefix. Feature routers are nested here as their modules land, without
/// touching the entry point:
///
/// ```ignore
/// Router::new()
///     .nest("/documents", init_documents_router())
///     .nest("/bookmarks", init_bookmarks_router())
/// ```
pub fn init_api_router() -> Router<AppState> {
    Router::new()
}

pub fn init_router(state: AppState) -> Router {
    init_router_with_api(state, init_api_router())
}

/// Mounts `api_router` under `state.app_config.api_prefix` alongside the
/// health check and the API documentation UIs, then installs the CORS gate
/// and request logging. Split out from [`init_router`] so tests can attach
/// routes to the API router before it is mounted.
pub fn init_router_with_api(state: AppState, api_router: Router<AppState>) -> Router {
    let cors = cors_layer(&state.cors_config);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .nest(&state.app_config.api_prefix, api_router)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
