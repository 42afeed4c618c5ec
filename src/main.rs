//! Server binary: environment, logging, pool, listen on port 3000.

use course_api::{app, create_pool, AppState, DbConfig, PoolSettings, PORT};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_api=info,tower_http=info")),
        )
        .init();

    let config = DbConfig::from_env();
    let pool = create_pool(&config, &PoolSettings::default());
    let state = AppState { pool };

    let listener = TcpListener::bind(("0.0.0.0", PORT)).await?;
    tracing::info!("Server is running on port {}", listener.local_addr()?.port());
    axum::serve(listener, app(state)).await?;
    Ok(())
}
