//! Middleware Module
//!
//! Request-processing helpers that run before handler logic. Currently
//! this is the session-cookie authentication extractor.

pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser};
