/**
 * Register Handler
 *
 * This module implements the account registration handler for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Hash the password using bcrypt
 * 2. Insert the account row; the UNIQUE constraint on email decides duplicates
 * 3. Return a confirmation message
 *
 * # Validation
 *
 * There is none. Empty names, empty passwords and malformed emails are
 * all accepted; the UNIQUE constraint on `users.email` is the only rule
 * a registration can break.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before they touch the database
 * - The plaintext password is never logged or returned
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;
use sqlx::SqlitePool;

use crate::accounts::handlers::types::{MessageResponse, RegisterRequest};
use crate::accounts::store::insert_account;
use crate::error::ServiceError;

/// bcrypt work factor applied to new password hashes
const BCRYPT_COST: u32 = 10;

/// Register handler
///
/// This handler processes account registration requests. It hashes the
/// password and inserts the row, leaving duplicate detection entirely to
/// the database.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Registration request containing name, email and password
///
/// # Returns
///
/// `201 Created` with a confirmation message
///
/// # Errors
///
/// * `400 Bad Request` - If the email is already registered
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ana",
///   "email": "ana@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "User registered successfully."
/// }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ServiceError> {
    tracing::info!("Registration request for email: {}", request.email);

    // Hash password
    let password_hash = hash(&request.password, BCRYPT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ServiceError::Hashing
    })?;

    // Insert account; the UNIQUE constraint arbitrates duplicates
    let account = match insert_account(&pool, &request.name, &request.email, &password_hash).await {
        Ok(account) => account,
        Err(ServiceError::EmailExists) => {
            tracing::warn!("Email already exists: {}", request.email);
            return Err(ServiceError::EmailExists);
        }
        Err(e) => {
            tracing::error!("Failed to create account: {:?}", e);
            return Err(e);
        }
    };

    tracing::info!("Account created successfully: {} ({})", account.name, account.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully.".to_string(),
        }),
    ))
}
