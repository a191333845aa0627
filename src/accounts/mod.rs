//! Accounts Module
//!
//! Registration and login for the site's user accounts, backed by the
//! single `users` table in SQLite.
//!
//! # Architecture
//!
//! ```text
//! accounts/
//! ├── mod.rs      - Module exports and documentation
//! ├── store.rs    - Account model and database operations
//! └── handlers/   - HTTP handlers (register, login) and their types
//! ```
//!
//! # Design
//!
//! The store is deliberately small: one insert, one lookup, one schema
//! bootstrap. Duplicate emails are decided by the UNIQUE constraint at
//! insert time, never by a prior read, so concurrent registrations of
//! the same email always resolve to one winner and one
//! "Email already exists." rejection.

/// Account model and database operations
pub mod store;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used items
pub use store::{find_account_by_email, insert_account, Account};
