/**
 * Post Handlers
 *
 * HTTP handlers for the post endpoints:
 *
 * - `POST /post` - create a post (requires a session)
 * - `GET /post` - list posts with title filter and pagination
 * - `GET /numPost` - count posts matching the filter
 * - `GET /post/{id}` - fetch one post
 * - `PUT /post/{id}` - replace a post (requires a session)
 * - `DELETE /delete/{id}` - delete a post (requires the author's session)
 *
 * # Authentication
 *
 * Protected handlers take the `AuthUser` extractor, which verifies the
 * session cookie before the handler body runs. Create and update assign
 * the post's author from the token subject; delete additionally checks
 * that the token subject matches the stored author.
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::media::MediaUploader;
use crate::middleware::auth::AuthUser;
use crate::posts::db;
use crate::posts::db::{Post, PostWithAuthor};

/// Create-post request body
///
/// `file` is the image payload forwarded to the media host, a data-URI
/// string as produced by the web client.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub file: String,
}

/// Update-post request body
///
/// A non-empty `file` is uploaded and replaces the cover; otherwise the
/// supplied `cover` value is kept as-is.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: Option<String>,
    pub file: Option<String>,
}

/// Query parameters for listing posts
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter on the title
    pub title: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size; absent means no limit
    pub limit: Option<i64>,
}

/// Query parameters for counting posts
#[derive(Debug, Deserialize)]
pub struct CountParams {
    /// Case-insensitive substring filter on the title
    pub title: Option<String>,
}

/// Count response
#[derive(Debug, Serialize)]
pub struct CountResponse {
    /// Number of posts matching the filter
    pub result: i64,
}

fn require_pool(pool: Option<PgPool>) -> Result<PgPool, ApiError> {
    pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::unavailable("database not configured")
    })
}

/// Create a post
///
/// Uploads the image payload for the cover URL, then inserts the post
/// with the session's account as author.
///
/// # Errors
///
/// * `401 authentication` - Missing or invalid session cookie
/// * `500 upload` - Media host failure
/// * `503 unavailable` - Database not configured
pub async fn create_post(
    State(pool): State<Option<PgPool>>,
    State(media): State<MediaUploader>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let pool = require_pool(pool)?;

    let cover = media.upload(&request.file).await?;

    let post = db::insert_post(
        &pool,
        &request.title,
        &request.summary,
        &request.content,
        &cover,
        user.account_id,
    )
    .await?;

    tracing::info!("Post created: {} by {}", post.id, user.username);
    Ok(Json(post))
}

/// List posts newest-first
///
/// Applies the title filter and 1-based pagination; a missing or empty
/// title parameter means no filtering.
pub async fn list_posts(
    State(pool): State<Option<PgPool>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PostWithAuthor>>, ApiError> {
    let pool = require_pool(pool)?;

    let filter = params.title.as_deref().filter(|t| !t.is_empty());
    let limit = params.limit.map(|l| l.max(0));
    let offset = db::page_offset(params.page, limit);

    let posts = db::find_posts(&pool, filter, limit, offset).await?;
    Ok(Json(posts))
}

/// Count posts matching the title filter, ignoring pagination
pub async fn count_posts(
    State(pool): State<Option<PgPool>>,
    Query(params): Query<CountParams>,
) -> Result<Json<CountResponse>, ApiError> {
    let pool = require_pool(pool)?;

    let filter = params.title.as_deref().filter(|t| !t.is_empty());
    let result = db::count_posts(&pool, filter).await?;
    Ok(Json(CountResponse { result }))
}

/// Fetch one post by id
///
/// # Errors
///
/// * `404 not_found` - No post with that id
pub async fn get_post(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostWithAuthor>, ApiError> {
    let pool = require_pool(pool)?;

    let post = db::find_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("no post with that id"))?;

    Ok(Json(post))
}

/// Replace a post
///
/// A supplied image file is uploaded and becomes the cover; otherwise
/// the `cover` field from the body is kept. All fields are replaced and
/// the author is reassigned to the session's account.
///
/// # Errors
///
/// * `401 authentication` - Missing or invalid session cookie
/// * `404 not_found` - No post with that id
/// * `500 upload` - Media host failure
pub async fn update_post(
    State(pool): State<Option<PgPool>>,
    State(media): State<MediaUploader>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let pool = require_pool(pool)?;

    let cover = match request.file.as_deref().filter(|f| !f.is_empty()) {
        Some(file) => media.upload(file).await?,
        None => request.cover.unwrap_or_default(),
    };

    let post = db::replace_post(
        &pool,
        id,
        &request.title,
        &request.summary,
        &request.content,
        &cover,
        user.account_id,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("no post with that id"))?;

    tracing::info!("Post updated: {} by {}", post.id, user.username);
    Ok(Json(post))
}

/// Delete a post
///
/// Only the post's author may delete it.
///
/// # Errors
///
/// * `401 authentication` - Missing or invalid session cookie
/// * `403 permission` - Session account is not the post's author
/// * `404 not_found` - No post with that id
pub async fn delete_post(
    State(pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let pool = require_pool(pool)?;

    let existing = db::find_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("no post with that id"))?;

    if existing.author.as_ref().map(|a| a.id) != Some(user.account_id) {
        tracing::warn!(
            "Delete refused: {} is not the author of {}",
            user.username,
            id
        );
        return Err(ApiError::permission("only the author may delete this post"));
    }

    let post = db::remove_post(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("no post with that id"))?;

    tracing::info!("Post deleted: {} by {}", post.id, user.username);
    Ok(Json(post))
}
