//! Media Module
//!
//! This module wraps the external media-hosting service. The only
//! operation is uploading an image payload in exchange for a public URL
//! that is stored as a post's cover.

/// Media host upload client
pub mod uploader;

// Re-export commonly used types
pub use uploader::{MediaUploader, UploadError};
