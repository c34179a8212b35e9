use dotenvy::dotenv;
use medical_doc_ai::router::init_router;
use medical_doc_ai::state::init_app_state;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state();
    tracing::info!(
        app = %state.app_config.name,
        env = %state.app_config.env,
        api_prefix = %state.app_config.api_prefix,
        "Configuration loaded"
    );

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000")
        .await
        .expect("Failed to bind 0.0.0.0:8000");
    println!("🚀 Server running on http://localhost:8000");
    println!("📚 Swagger UI available at http://localhost:8000/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:8000/scalar");
    axum::serve(listener, app).await.expect("Server error");
}
