/**
 * Login Handler
 *
 * This module implements the account authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by exact email match
 * 2. Verify the password against the stored bcrypt hash
 * 3. Return the account's public fields
 *
 * # Security
 *
 * - Unknown email and wrong password produce byte-identical responses,
 *   so the endpoint cannot be used to probe which emails are registered
 * - A stored hash that bcrypt cannot parse is treated as a mismatch
 * - Passwords and hashes are never logged or returned
 */

use axum::{
    extract::State,
    response::Json,
};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::accounts::handlers::types::{AccountInfo, LoginRequest, LoginResponse};
use crate::accounts::store::find_account_by_email;
use crate::error::ServiceError;

/// Login handler
///
/// This handler processes authentication requests. It checks the email
/// and password and, on success, returns the stored account fields.
/// Success grants nothing beyond this response; there is no session or
/// token, and nothing about the request is persisted.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with a confirmation message and the account's id, name and email
///
/// # Errors
///
/// * `400 Bad Request` - If the email is unknown or the password is wrong
/// * `500 Internal Server Error` - If the database query fails
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful.",
///   "user": {
///     "id": 1,
///     "name": "Ana",
///     "email": "ana@example.com"
///   }
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServiceError> {
    tracing::info!("Login request for email: {}", request.email);

    let account = match find_account_by_email(&pool, &request.email).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            tracing::warn!("No account for email: {}", request.email);
            return Err(ServiceError::InvalidCredentials);
        }
        Err(e) => {
            tracing::error!("Account lookup failed: {:?}", e);
            return Err(e);
        }
    };

    // Verify password
    match verify(&request.password, &account.password) {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("Invalid password for email: {}", request.email);
            return Err(ServiceError::InvalidCredentials);
        }
        Err(e) => {
            // Unreadable stored hash; reject like a mismatch
            tracing::error!("Password verification error: {:?}", e);
            return Err(ServiceError::InvalidCredentials);
        }
    }

    tracing::info!("Login successful: {} ({})", account.name, account.email);

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        user: AccountInfo {
            id: account.id,
            name: account.name,
            email: account.email,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::store::{ensure_schema, insert_account};
    use sqlx::sqlite::SqlitePoolOptions;

    /// Low work factor keeps the tests fast; verification reads the
    /// factor out of the hash itself.
    const TEST_COST: u32 = 4;

    async fn test_pool() -> SqlitePool {
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

    async fn seed_account(pool: &SqlitePool, name: &str, email: &str, password: &str) {
        let hash = bcrypt::hash(password, TEST_COST).unwrap();
        insert_account(pool, name, email, &hash).await.unwrap();
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let pool = test_pool().await;
        seed_account(&pool, "Ana", "ana@example.com", "hunter2").await;

        let result = login(State(pool.clone()), Json(request("ana@example.com", "hunter2"))).await;

        let Json(response) = result.unwrap();
        assert_eq!(response.message, "Login successful.");
        assert_eq!(response.user.name, "Ana");
        assert_eq!(response.user.email, "ana@example.com");
        assert!(response.user.id >= 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let pool = test_pool().await;
        seed_account(&pool, "Ana", "ana@example.com", "hunter2").await;

        let result = login(
            State(pool.clone()),
            Json(request("ana@example.com", "wrong-password")),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let pool = test_pool().await;

        let result = login(
            State(pool.clone()),
            Json(request("nobody@example.com", "hunter2")),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ServiceError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let pool = test_pool().await;
        seed_account(&pool, "Ana", "ana@example.com", "hunter2").await;

        let unknown = login(
            State(pool.clone()),
            Json(request("nobody@example.com", "hunter2")),
        )
        .await
        .unwrap_err();
        let mismatch = login(
            State(pool.clone()),
            Json(request("ana@example.com", "wrong-password")),
        )
        .await
        .unwrap_err();

        assert_eq!(unknown.message(), mismatch.message());
        assert_eq!(unknown.status_code(), mismatch.status_code());
    }

    #[tokio::test]
    async fn test_login_unreadable_hash_is_rejected() {
        let pool = test_pool().await;
        // Row written outside the register path, with garbage where the
        // bcrypt hash belongs.
        insert_account(&pool, "Ana", "ana@example.com", "not-a-bcrypt-hash")
            .await
            .unwrap();

        let result = login(
            State(pool.clone()),
            Json(request("ana@example.com", "anything")),
        )
        .await;

        assert!(matches!(result.unwrap_err(), ServiceError::InvalidCredentials));
    }
}
