//! Inkpost - Blog Backend
//!
//! Inkpost is a minimal blog backend: account registration and login with
//! token-based session cookies, and CRUD over blog posts with image
//! upload to a third-party media host.
//!
//! # Module Structure
//!
//! - **`server`** - Initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, session tokens, cookies, auth handlers
//! - **`posts`** - Post store and post handlers
//! - **`media`** - Media host upload client
//! - **`middleware`** - Session-cookie authentication extractor
//! - **`error`** - Handler error taxonomy
//!
//! # Request Flow
//!
//! Router → handler → (auth extractor for protected routes) → store
//! and/or uploader → response. Each request is one independent unit of
//! work; handlers share no mutable in-process state beyond the pool and
//! the HTTP client.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: accounts, sessions, cookies, handlers
pub mod auth;

/// Posts: store and handlers
pub mod posts;

/// Media host upload client
pub mod media;

/// Request middleware
pub mod middleware;

/// Handler error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
