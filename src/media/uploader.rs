/**
 * Media Host Upload Client
 *
 * This module sends image payloads to the external media-hosting service
 * and returns the public URL of the stored image.
 *
 * # Upload Flow
 *
 * The client posts an urlencoded form to the configured upload endpoint
 * with three fields: the file payload (a data-URI string as sent by the
 * web client), the unsigned upload preset, and the target folder. The
 * host answers with a JSON document whose `secure_url` field is the
 * public link.
 *
 * # Error Handling
 *
 * Upload failures never crash a request: they surface as `UploadError`
 * and handlers translate them to a 500. A per-request timeout guards
 * against an unresponsive host.
 */

use std::time::Duration;

use thiserror::Error;

use crate::server::config::MediaConfig;

/// Timeout for a single upload request
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the media host client
#[derive(Debug, Error)]
pub enum UploadError {
    /// The upload endpoint was not configured at startup
    #[error("media host is not configured")]
    NotConfigured,

    /// The HTTP request itself failed (connect, timeout, body read)
    #[error("media host request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host answered with a non-success status
    #[error("media host rejected the upload with status {status}")]
    Rejected {
        /// HTTP status returned by the host
        status: u16,
    },

    /// The media host answered 2xx but without a usable public URL
    #[error("media host response did not contain a public url")]
    MalformedResponse,
}

/// Client for the external media-hosting service
///
/// Cheap to clone; the inner `reqwest::Client` is an `Arc` around a
/// connection pool shared by all request handlers.
#[derive(Clone)]
pub struct MediaUploader {
    http: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    folder: String,
}

impl MediaUploader {
    /// Create an uploader from the media section of the app config
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upload_url: config.upload_url.clone(),
            upload_preset: config.upload_preset.clone(),
            folder: config.folder.clone(),
        }
    }

    /// Upload an image payload and return its public URL
    ///
    /// # Arguments
    /// * `file` - Image payload as a data-URI string
    ///
    /// # Returns
    /// The public URL of the stored image, or an `UploadError`
    pub async fn upload(&self, file: &str) -> Result<String, UploadError> {
        if self.upload_url.is_empty() {
            return Err(UploadError::NotConfigured);
        }

        let params = [
            ("file", file),
            ("upload_preset", self.upload_preset.as_str()),
            ("folder", self.folder.as_str()),
        ];

        let response = self
            .http
            .post(&self.upload_url)
            .timeout(UPLOAD_TIMEOUT)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Media host rejected upload: {}", status);
            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        body.get("secure_url")
            .and_then(|url| url.as_str())
            .map(str::to_owned)
            .ok_or(UploadError::MalformedResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_not_configured() {
        let uploader = MediaUploader::new(&MediaConfig {
            upload_url: String::new(),
            upload_preset: String::new(),
            folder: "images".to_string(),
        });

        let result = uploader.upload("data:image/png;base64,AAAA").await;
        assert!(matches!(result, Err(UploadError::NotConfigured)));
    }
}
