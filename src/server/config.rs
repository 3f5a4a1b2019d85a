/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the listen port, the token signing secret, the allowed client origin,
 * the media host credentials, and the optional PostgreSQL connection.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables once at startup (a
 * `.env` file is honored via dotenv in `main`), with development
 * defaults where that is safe.
 *
 * # Error Handling
 *
 * Configuration problems are logged but do not prevent server startup.
 * Without a database the data endpoints answer 503; without a media
 * endpoint image uploads fail with an upload error.
 */

use sqlx::PgPool;

/// Media host settings
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Image upload endpoint of the media host
    pub upload_url: String,
    /// Unsigned upload preset name
    pub upload_preset: String,
    /// Folder the host stores images under
    pub folder: String,
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server listens on
    pub port: u16,
    /// Symmetric secret for session token signing
    pub jwt_secret: String,
    /// PostgreSQL connection string, if configured
    pub database_url: Option<String>,
    /// Origin of the browser client, for cross-origin policy
    pub client_origin: Option<String>,
    /// Directory served read-only under /public
    pub public_dir: String,
    /// Media host settings
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using a development default");
            "change-me-in-production".to_string()
        });

        let database_url = std::env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        }

        let client_origin = std::env::var("DOMAIN_CLIENT").ok();
        if client_origin.is_none() {
            tracing::warn!("DOMAIN_CLIENT not set, cross-origin requests are disabled");
        }

        let public_dir = std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        let media = MediaConfig {
            upload_url: std::env::var("MEDIA_UPLOAD_URL").unwrap_or_default(),
            upload_preset: std::env::var("MEDIA_UPLOAD_PRESET").unwrap_or_default(),
            folder: std::env::var("MEDIA_UPLOAD_FOLDER").unwrap_or_else(|_| "images".to_string()),
        };
        if media.upload_url.is_empty() {
            tracing::warn!("MEDIA_UPLOAD_URL not set, image uploads will fail");
        }

        Self {
            port,
            jwt_secret,
            database_url,
            client_origin,
            public_dir,
            media,
        }
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Connects to PostgreSQL using the configured URL
/// 2. Runs the embedded migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if no URL is set or the connection fails
///
/// Errors are logged but do not prevent server startup; the server runs
/// without database features and the data endpoints answer 503.
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let database_url = database_url?;

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
