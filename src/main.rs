use campeonato_api::{app, config::Config, db::Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting championship server...");

    let config = Config::from_env()?;

    let store = if config.seed_data {
        Store::seeded()
    } else {
        Store::new()
    };
    tracing::info!(seed_data = config.seed_data, "In-memory store ready.");

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!("Server listening on {}", config.addr);

    axum::serve(listener, app(store.into_shared())).await?;

    Ok(())
}
