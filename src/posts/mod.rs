//! Posts Module
//!
//! This module handles blog posts: the database operations and the HTTP
//! handlers for creating, listing, fetching, updating and deleting them.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Post model and database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Post model and database operations
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

// Re-export commonly used types
pub use db::{AuthorRef, Post, PostWithAuthor};
