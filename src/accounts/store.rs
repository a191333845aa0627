/**
 * Account Model and Database Operations
 *
 * This module handles account rows and their database operations.
 * All persistent state lives in the single `users` table.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ServiceError;

/// Account struct representing one row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (assigned by AUTOINCREMENT, never reused)
    pub id: i64,
    /// Display name, stored exactly as supplied
    pub name: String,
    /// Email address (unique, the login key)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password: String,
}

/// Create the `users` table if it does not exist yet
///
/// Runs at startup against a fresh or existing database file. The
/// statement is idempotent, so restarts leave existing rows untouched.
///
/// # Arguments
/// * `pool` - Database connection pool
///
/// # Returns
/// Ok on success, sqlx error otherwise
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT UNIQUE,
            password TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert a new account
///
/// Duplicate emails are arbitrated by the UNIQUE constraint alone; there
/// is no lookup beforehand, so two concurrent inserts of the same email
/// resolve to exactly one winner.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `email` - Email address
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created account, `EmailExists` on a duplicate email, or `Database`
pub async fn insert_account(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Account, ServiceError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO users (name, email, password)
        VALUES (?, ?, ?)
        RETURNING id, name, email, password
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Get account by email
///
/// The match is exact and case-sensitive, the same comparison SQLite
/// applies for the UNIQUE constraint.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email address
///
/// # Returns
/// Account or None if not found
pub async fn find_account_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, ServiceError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, name, email, password
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // A single connection keeps the in-memory database alive for the
        // whole test.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        ensure_schema(&pool).await.expect("schema");
        pool
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = test_pool().await;
        insert_account(&pool, "Ana", "ana@example.com", "hash").await.unwrap();

        ensure_schema(&pool).await.unwrap();

        let found = find_account_by_email(&pool, "ana@example.com").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_insert_and_find_roundtrip() {
        let pool = test_pool().await;

        let created = insert_account(&pool, "Ana", "ana@example.com", "hash-1")
            .await
            .unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.email, "ana@example.com");
        assert_eq!(created.password, "hash-1");

        let found = find_account_by_email(&pool, "ana@example.com")
            .await
            .unwrap()
            .expect("row should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.password, "hash-1");
    }

    #[tokio::test]
    async fn test_find_unknown_email_is_none() {
        let pool = test_pool().await;
        let found = find_account_by_email(&pool, "nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let pool = test_pool().await;
        insert_account(&pool, "Ana", "ana@example.com", "hash-1").await.unwrap();

        let err = insert_account(&pool, "Another Ana", "ana@example.com", "hash-2")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::EmailExists));

        // The original row is untouched.
        let found = find_account_by_email(&pool, "ana@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Ana");
        assert_eq!(found.password, "hash-1");
    }

    #[tokio::test]
    async fn test_ids_are_assigned_in_order() {
        let pool = test_pool().await;

        let first = insert_account(&pool, "A", "a@example.com", "h").await.unwrap();
        let second = insert_account(&pool, "B", "b@example.com", "h").await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let pool = test_pool().await;
        insert_account(&pool, "Ana", "Ana@Example.com", "hash").await.unwrap();

        let found = find_account_by_email(&pool, "ana@example.com").await.unwrap();
        assert!(found.is_none());
    }
}
