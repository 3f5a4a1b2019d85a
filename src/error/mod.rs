//! Error Module
//!
//! This module defines the error taxonomy used by the HTTP handlers.
//! Every failure a handler can produce is an `ApiError` variant, and all
//! of them convert to an HTTP response with a structured JSON body.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
