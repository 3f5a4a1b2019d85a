//! Authentication Module
//!
//! This module handles account registration, login and session management.
//! It provides HTTP handlers for the auth endpoints and manages account
//! data and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account model and database operations
//! ├── sessions.rs     - Session token issuance and verification
//! ├── cookies.rs      - Session cookie helpers
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Account registration handler
//!     ├── login.rs    - Login handler
//!     ├── logout.rs   - Logout handler
//!     └── verify.rs   - Token verification handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → account created → session cookie set
//! 2. **Login**: credentials verified → session cookie set
//! 3. **Verify**: cookie token verified → claims returned
//! 4. **Logout**: session cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Session tokens are stateless HS256 JWTs with a 1-hour expiry
//! - Invalid credentials return 401 without distinguishing unknown
//!   usernames from wrong passwords (no information leakage)
//! - There is no revocation: logout only clears the client-side cookie

/// Account model and database operations
pub mod accounts;

/// Session token issuance and verification
pub mod sessions;

/// Session cookie helpers
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use handlers::{login, logout, register, verify_session};
