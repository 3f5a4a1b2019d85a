/**
 * Inkpost Server Entry Point
 *
 * Loads the environment, initializes tracing, assembles the Axum app
 * and serves it until a shutdown signal arrives. The database pool is
 * closed explicitly on the way out.
 */

use std::sync::Arc;

use inkpost::server::config::AppConfig;
use inkpost::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Arc::new(AppConfig::from_env());
    let (app, state) = create_app(config.clone()).await;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Teardown: close the pool so in-flight writes flush before exit
    if let Some(pool) = state.db_pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
