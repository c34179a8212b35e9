use std::env;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

#[derive(Clone, Debug)]
pub struct CorsConfig {
    /// Raw origin specification: `*`, a single origin, or a comma-separated
    /// list of origins.
    pub origins: String,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self {
            origins: env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        }
    }

    pub fn allowed_origins(&self) -> AllowedOrigins {
        AllowedOrigins::parse(&self.origins)
    }
}

/// Concrete allow-list derived from the raw `CORS_ORIGINS` specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin is permitted; responses carry a literal `*`.
    Any,
    /// Only exact string matches against the listed origins are permitted.
    /// An empty list permits nothing.
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parses the raw specification.
    ///
    /// An empty string yields an empty allow-list and `*` yields the
    /// wildcard. Anything else is split on commas with surrounding
    /// whitespace trimmed from each segment. Segments are otherwise kept
    /// as-is: order and duplicates are preserved, and an empty segment
    /// (e.g. from a trailing comma) stays in the list even though no real
    /// `Origin` header can match it.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::List(Vec::new());
        }
        if raw == "*" {
            return Self::Any;
        }
        Self::List(raw.split(',').map(|s| s.trim().to_string()).collect())
    }
}

/// Builds the CORS layer installed on the application router.
///
/// In wildcard mode every origin, method, and header is allowed and the
/// response echoes `*`. In list mode the response echoes the request origin
/// only on an exact match against the allow-list, requested headers are
/// mirrored back, and credentials are allowed. `tower-http` rejects
/// combining credentials with a wildcard origin, so the credentials flag is
/// only set in list mode.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match config.allowed_origins() {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        AllowedOrigins::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}
