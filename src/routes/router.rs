/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the API route table, static file serving and the cross-origin policy
 * into a single Axum router.
 *
 * # Route Order
 *
 * 1. Home banner
 * 2. API routes (auth, posts)
 * 3. Static files under /public
 * 4. Fallback handler (404)
 *
 * # Cross-Origin Policy
 *
 * Only the configured client origin is allowed, with credentials
 * enabled so the session cookie travels on cross-site requests. With no
 * origin configured the layer is omitted entirely.
 */

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::routes::api_routes::configure_api_routes;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, media client, config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let config = app_state.config.clone();

    let router = Router::new().route("/", axum::routing::get(home));

    // Add API routes
    let router = configure_api_routes(router);

    // Add static file serving
    let router = router.nest_service("/public", ServeDir::new(&config.public_dir));

    // Cross-origin policy for the configured client
    let router = match cors_layer(&config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    // Fallback handler for unknown routes
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Use AppState as router state
    router.with_state(app_state)
}

/// Home banner
async fn home() -> &'static str {
    "Home page"
}

/// Build the CORS layer for the configured client origin
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origin = config.client_origin.as_deref()?;

    match origin.parse::<HeaderValue>() {
        Ok(origin) => Some(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        ),
        Err(_) => {
            tracing::warn!("DOMAIN_CLIENT is not a valid origin, cross-origin requests disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::MediaConfig;

    fn test_config(client_origin: Option<&str>) -> AppConfig {
        AppConfig {
            port: 3000,
            jwt_secret: "test-secret".to_string(),
            database_url: None,
            client_origin: client_origin.map(str::to_owned),
            public_dir: "public".to_string(),
            media: MediaConfig {
                upload_url: String::new(),
                upload_preset: String::new(),
                folder: "images".to_string(),
            },
        }
    }

    #[test]
    fn test_cors_layer_with_origin() {
        let config = test_config(Some("http://localhost:5173"));
        assert!(cors_layer(&config).is_some());
    }

    #[test]
    fn test_cors_layer_without_origin() {
        let config = test_config(None);
        assert!(cors_layer(&config).is_none());
    }

    #[test]
    fn test_cors_layer_invalid_origin() {
        let config = test_config(Some("not an origin\n"));
        assert!(cors_layer(&config).is_none());
    }
}
