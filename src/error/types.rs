/**
 * Service Error Types
 *
 * This module defines the error types returned by the HTTP API.
 * Every error maps to a fixed status code and a fixed client-facing
 * message, so the wire format never leaks internal detail.
 *
 * # Error Types
 *
 * - `EmailExists` - Registration hit the UNIQUE constraint on `users.email`
 * - `InvalidCredentials` - Login failed (unknown email or wrong password)
 * - `Validation` - A form relay request was missing a required field
 * - `Database` - A SQLite query failed for any other reason
 * - `Hashing` - bcrypt could not produce a password hash
 * - `FormRelay` - The upstream form service rejected or never saw a submission
 *
 * # Message Stability
 *
 * The messages here are part of the public API contract. `InvalidCredentials`
 * in particular must stay byte-identical for the unknown-email and
 * wrong-password cases, so callers cannot probe which emails are registered.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Errors surfaced by the API handlers
///
/// Each variant carries its client-facing message as its `Display` output
/// and maps to exactly one HTTP status code via [`ServiceError::status_code`].
///
/// # Usage
///
/// ```rust
/// use recharge_site::error::ServiceError;
/// use axum::http::StatusCode;
///
/// let err = ServiceError::InvalidCredentials;
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.message(), "Invalid email or password.");
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Registration attempted to reuse an existing email
    ///
    /// Produced when an INSERT into `users` trips the UNIQUE constraint.
    /// The constraint is the only duplicate check; there is no prior
    /// SELECT, so concurrent registrations race safely.
    #[error("Email already exists.")]
    EmailExists,

    /// Login failed, deliberately without saying why
    ///
    /// Covers unknown email, wrong password, and stored hashes that
    /// bcrypt cannot parse. All three cases produce the same response.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// A contact or newsletter submission was missing a required field
    ///
    /// The message names the field in the same words the site's forms use.
    #[error("{message}")]
    Validation {
        /// Client-facing validation message
        message: &'static str,
    },

    /// A SQLite query failed
    ///
    /// The underlying error is kept for logging; the client only ever
    /// sees the generic message.
    #[error("Database error.")]
    Database(#[source] sqlx::Error),

    /// bcrypt failed to hash a password
    #[error("Server error.")]
    Hashing,

    /// The upstream form service could not be reached or rejected the payload
    #[error("Form submission failed.")]
    FormRelay,
}

impl ServiceError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `EmailExists` - 400 Bad Request
    /// - `InvalidCredentials` - 400 Bad Request
    /// - `Validation` - 400 Bad Request
    /// - `Database` - 500 Internal Server Error
    /// - `Hashing` - 500 Internal Server Error
    /// - `FormRelay` - 502 Bad Gateway
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::EmailExists => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Hashing => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FormRelay => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the client-facing error message
    ///
    /// # Returns
    ///
    /// The exact string placed in the response body's `error` field.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<sqlx::Error> for ServiceError {
    /// Classify a sqlx error
    ///
    /// A UNIQUE constraint violation becomes `EmailExists`; `users.email`
    /// is the only unique column, so no further inspection is needed.
    /// Everything else is a generic `Database` error.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::EmailExists;
            }
        }
        Self::Database(err)
    }
}
