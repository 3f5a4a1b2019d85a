//! Database operations for posts
//!
//! This module contains the post model and all post queries. Reads resolve
//! the author to `{id, username}` with a LEFT JOIN; a post whose author no
//! longer matches an account is returned with a null author rather than
//! dropped.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Post struct representing a blog post in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID (UUID)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Short summary shown in listings
    pub summary: String,
    /// Full post body
    pub content: String,
    /// Public URL of the cover image
    pub cover: String,
    /// Author account ID, best-effort reference
    pub author: Option<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Author reference resolved at read time
#[derive(Debug, Clone, Serialize)]
pub struct AuthorRef {
    /// Account ID
    pub id: Uuid,
    /// Username
    pub username: String,
}

/// Post with its author resolved to `{id, username}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithAuthor {
    /// Unique post ID (UUID)
    pub id: Uuid,
    /// Post title
    pub title: String,
    /// Short summary shown in listings
    pub summary: String,
    /// Full post body
    pub content: String,
    /// Public URL of the cover image
    pub cover: String,
    /// Resolved author, None when the account no longer exists
    pub author: Option<AuthorRef>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Build a LIKE pattern for a case-insensitive substring title match
///
/// LIKE metacharacters in the user's input are escaped so they match
/// literally.
pub fn like_pattern(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len());
    for c in title.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("%{}%", escaped)
}

/// Compute the row offset for 1-based pagination
///
/// Pages at or below zero clamp to the first page instead of producing a
/// negative offset. Without a limit the offset is always zero.
pub fn page_offset(page: Option<i64>, limit: Option<i64>) -> i64 {
    let page = page.unwrap_or(1);
    (page - 1).max(0) * limit.unwrap_or(0).max(0)
}

fn row_to_post_with_author(row: &PgRow) -> PostWithAuthor {
    let author_id: Option<Uuid> = row.get("author");
    let author_username: Option<String> = row.get("author_username");
    let author = match (author_id, author_username) {
        (Some(id), Some(username)) => Some(AuthorRef { id, username }),
        _ => None,
    };

    PostWithAuthor {
        id: row.get("id"),
        title: row.get("title"),
        summary: row.get("summary"),
        content: row.get("content"),
        cover: row.get("cover"),
        author,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Insert a new post
pub async fn insert_post(
    pool: &PgPool,
    title: &str,
    summary: &str,
    content: &str,
    cover: &str,
    author: Uuid,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, summary, content, cover, author, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, summary, content, cover, author, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(summary)
    .bind(content)
    .bind(cover)
    .bind(author)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// List posts newest-first with an optional title filter and pagination
///
/// `title_filter` is matched as a case-insensitive substring. A `None`
/// limit returns every matching row.
pub async fn find_posts(
    pool: &PgPool,
    title_filter: Option<&str>,
    limit: Option<i64>,
    offset: i64,
) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let pattern = title_filter.map(like_pattern);

    let rows = sqlx::query(
        r#"
        SELECT p.id, p.title, p.summary, p.content, p.cover, p.author,
               p.created_at, p.updated_at, a.username AS author_username
        FROM posts p
        LEFT JOIN accounts a ON a.id = p.author
        WHERE ($1::text IS NULL OR p.title ILIKE $1)
        ORDER BY p.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(row_to_post_with_author).collect())
}

/// Count posts matching the same title filter as `find_posts`
pub async fn count_posts(pool: &PgPool, title_filter: Option<&str>) -> Result<i64, sqlx::Error> {
    let pattern = title_filter.map(like_pattern);

    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS total
        FROM posts p
        WHERE ($1::text IS NULL OR p.title ILIKE $1)
        "#,
    )
    .bind(pattern)
    .fetch_one(pool)
    .await?;

    Ok(row.get("total"))
}

/// Get a post by ID with its author resolved
pub async fn find_post_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.title, p.summary, p.content, p.cover, p.author,
               p.created_at, p.updated_at, a.username AS author_username
        FROM posts p
        LEFT JOIN accounts a ON a.id = p.author
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(row_to_post_with_author))
}

/// Replace every field of a post and reassign its author
///
/// Returns the updated post, or None if the id does not exist.
pub async fn replace_post(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    summary: &str,
    content: &str,
    cover: &str,
    author: Uuid,
) -> Result<Option<Post>, sqlx::Error> {
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, summary = $2, content = $3, cover = $4, author = $5, updated_at = $6
        WHERE id = $7
        RETURNING id, title, summary, content, cover, author, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(summary)
    .bind(content)
    .bind(cover)
    .bind(author)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post by ID
///
/// Returns the deleted post, or None if the id does not exist.
pub async fn remove_post(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        DELETE FROM posts
        WHERE id = $1
        RETURNING id, title, summary, content, cover, author, created_at, updated_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_like_pattern_plain() {
        assert_eq!(like_pattern("foo"), "%foo%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn test_page_offset_first_page() {
        assert_eq!(page_offset(Some(1), Some(10)), 0);
        assert_eq!(page_offset(None, Some(10)), 0);
    }

    #[test]
    fn test_page_offset_later_pages() {
        assert_eq!(page_offset(Some(2), Some(10)), 10);
        assert_eq!(page_offset(Some(5), Some(2)), 8);
    }

    #[test]
    fn test_page_offset_clamps_non_positive_pages() {
        assert_eq!(page_offset(Some(0), Some(10)), 0);
        assert_eq!(page_offset(Some(-3), Some(10)), 0);
    }

    #[test]
    fn test_page_offset_without_limit() {
        assert_eq!(page_offset(Some(4), None), 0);
    }

    #[test]
    fn test_page_offset_negative_limit() {
        assert_eq!(page_offset(Some(4), Some(-5)), 0);
    }
}
