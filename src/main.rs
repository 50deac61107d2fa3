use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use player_league::config::AppConfig;
use player_league::error::StartupError;
use player_league::{routes, store};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting player league server...");

    dotenvy::dotenv().ok();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "server stopped");
        return Err(err);
    }

    Ok(())
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;
    let store = store::open_store(&config).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::app(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
