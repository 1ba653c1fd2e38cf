use tracing::info;
use tracing_subscriber::EnvFilter;

use ponto_api::config::AppConfig;
use ponto_api::state::AppState;
use ponto_api::{app, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Using database {}", config.sanitized_database_url());

    let pool = database::connect(&config.database).await?;
    database::run_migrations(&pool).await?;

    let state = AppState::new(&config, pool);
    let router = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
