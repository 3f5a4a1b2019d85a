/**
 * Server Initialization
 *
 * This module assembles the Axum application: it loads the database,
 * builds the media client, creates the shared state, and configures
 * the router.
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database disables the data
 * endpoints instead of preventing startup, and a missing media endpoint
 * only fails uploads.
 */

use std::sync::Arc;

use axum::Router;

use crate::media::MediaUploader;
use crate::routes::router::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Configuration loaded by `AppConfig::from_env`
///
/// # Returns
///
/// The configured router plus the app state, so the caller can tear
/// down the pool on shutdown.
pub async fn create_app(config: Arc<AppConfig>) -> (Router<()>, AppState) {
    tracing::info!("Initializing inkpost backend server");

    let db_pool = load_database(config.database_url.as_deref()).await;
    let media = MediaUploader::new(&config.media);

    let app_state = AppState {
        db_pool,
        media,
        config,
    };

    let app = create_router(app_state.clone());
    tracing::info!("Router configured");

    (app, app_state)
}
