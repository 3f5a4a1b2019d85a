//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the auth endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /register - Account registration
//! - **`login`** - POST /login - Account authentication
//! - **`logout`** - POST /logout - Clear the session cookie
//! - **`verify_session`** - POST /verify-token - Decode the session cookie

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Token verification handler
pub mod verify;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use register::register;
pub use verify::verify_session;
