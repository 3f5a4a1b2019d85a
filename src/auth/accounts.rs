/**
 * Account Model and Database Operations
 *
 * This module handles account data and database operations. Accounts are
 * created on registration and read on login; nothing in this system ever
 * updates or deletes one.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

/// Role assigned to every account created through registration
pub const DEFAULT_ROLE: &str = "user";

/// Account struct representing a registered user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: uuid::Uuid,
    /// Username (unique, immutable after creation)
    pub username: String,
    /// Hashed password (bcrypt); never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Flat role string, "user" unless set out of band
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new account
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Chosen username
/// * `password_hash` - Hashed password
/// * `role` - Role string (normally `DEFAULT_ROLE`)
///
/// # Returns
/// Created account or error
pub async fn create_account(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    role: &str,
) -> Result<Account, sqlx::Error> {
    let id = uuid::Uuid::new_v4();
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (id, username, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, username, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Get account by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username
///
/// # Returns
/// Account or None if not found
pub async fn get_account_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<Account>, sqlx::Error> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, username, password_hash, role, created_at, updated_at
        FROM accounts
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

