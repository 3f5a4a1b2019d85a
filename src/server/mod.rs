//! Server Module
//!
//! This module contains the code that initializes and configures the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading (env, database)
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env` reads everything once
//! 2. **Database**: pool creation and migrations, degrading gracefully
//! 3. **State Creation**: pool + media uploader + config into `AppState`
//! 4. **Router Creation**: all routes, static files and CORS

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
