/**
 * Account Handler Types
 *
 * This module defines the request and response types used by the account
 * handlers. These types are shared across the register and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the name, email and password for account registration.
/// None of the fields are validated; whatever the client sends is
/// accepted and stored (the password after hashing).
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name, stored as supplied
    pub name: String,
    /// Email address (must be unused; uniqueness is the only constraint)
    pub email: String,
    /// Password (will be hashed before storage)
    pub password: String,
}

/// Login request
///
/// Contains the email and password for authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address, matched exactly against stored rows
    pub email: String,
    /// Password (will be verified against the stored hash)
    pub password: String,
}

/// Message-only response
///
/// Returned by the register handler on success.
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    /// Human-readable confirmation message
    pub message: String,
}

/// Login response
///
/// Returned by the login handler on success. Carries the account's
/// public fields; there is no token or session identifier.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Human-readable confirmation message
    pub message: String,
    /// Account information (without sensitive data)
    pub user: AccountInfo,
}

/// Account info (without sensitive data)
///
/// Contains account fields that are safe to return to clients.
/// The password hash never appears here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccountInfo {
    /// Account's unique ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}
