//! Integration tests for the media host upload client
//!
//! Runs the uploader against a local mock of the media host.

use inkpost::media::uploader::{MediaUploader, UploadError};
use inkpost::server::config::MediaConfig;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn uploader_for(server: &MockServer) -> MediaUploader {
    MediaUploader::new(&MediaConfig {
        upload_url: format!("{}/image/upload", server.uri()),
        upload_preset: "blog".to_string(),
        folder: "images".to_string(),
    })
}

#[tokio::test]
async fn test_upload_returns_public_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .and(body_string_contains("upload_preset=blog"))
        .and(body_string_contains("folder=images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "secure_url": "https://cdn.example.com/images/abc.png",
            "public_id": "images/abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uploader = uploader_for(&server);
    let url = uploader
        .upload("data:image/png;base64,iVBORw0KGgo=")
        .await
        .unwrap();

    assert_eq!(url, "https://cdn.example.com/images/abc.png");
}

#[tokio::test]
async fn test_upload_rejected_by_host() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"message": "Upload preset not found"},
        })))
        .mount(&server)
        .await;

    let uploader = uploader_for(&server);
    let result = uploader.upload("data:image/png;base64,AAAA").await;

    assert!(matches!(result, Err(UploadError::Rejected { status: 400 })));
}

#[tokio::test]
async fn test_upload_response_without_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/image/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "public_id": "images/abc",
        })))
        .mount(&server)
        .await;

    let uploader = uploader_for(&server);
    let result = uploader.upload("data:image/png;base64,AAAA").await;

    assert!(matches!(result, Err(UploadError::MalformedResponse)));
}
