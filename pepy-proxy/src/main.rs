use tower_http::cors::{Any, CorsLayer};

use pepy_proxy::{api, config, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    tracing::info!("Starting pepy stats proxy");

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);
    if config.pepy_api_key.is_empty() {
        tracing::warn!("PEPY_API_KEY is not set, upstream requests will be unauthenticated");
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::routes::create_router(AppState::new(&config))
        .layer(cors)
        .layer(tower_http::compression::CompressionLayer::new());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting HTTP server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
