/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding everything that is
 * initialized once at startup and injected into handlers:
 * - The optional PostgreSQL connection pool
 * - The media host upload client
 * - The process-wide configuration
 *
 * Handlers never touch ambient globals; they extract the piece of state
 * they need through `State<T>`, which the `FromRef` implementations
 * below make possible without handing out the whole `AppState`.
 *
 * # Thread Safety
 *
 * All fields are cheaply clonable handles over shared, internally
 * synchronized resources; no handler-side locking is needed.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::media::MediaUploader;
use crate::server::config::AppConfig;

/// Application state injected into all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `None` if the database is not configured; handlers answer 503 in
    /// that case.
    pub db_pool: Option<PgPool>,

    /// Media host upload client
    pub media: MediaUploader,

    /// Process-wide configuration
    pub config: Arc<AppConfig>,
}

/// Allow handlers to extract the optional database pool directly
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the media uploader directly
impl FromRef<AppState> for MediaUploader {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.media.clone()
    }
}

/// Allow handlers to extract the configuration directly
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
