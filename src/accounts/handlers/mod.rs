//! Account Handlers Module
//!
//! This module contains the HTTP handlers for the account endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - Account registration handler
//! └── login.rs    - Account authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - Account registration
//! - **`login`** - POST /api/login - Account authentication
//!
//! # Account Flow
//!
//! 1. **Register**: Client provides name, email and password → Password hashed → Row inserted
//! 2. **Login**: Client provides email and password → Credentials verified → Account fields returned
//!
//! Login success grants nothing durable: no session, no token, no
//! server-side record. The response body is the entire outcome.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Unknown email and wrong password produce identical 400 responses
//! - Password hashes never leave the database layer

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{AccountInfo, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
