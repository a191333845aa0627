//! Recharge - Main Library
//!
//! Recharge is the backend for a digital-wellness site. It serves the
//! account endpoints (register, login) over a single SQLite table, an
//! aggregated article list sourced from two public catalogs, a curated
//! video list, and relays for the site's contact and newsletter forms.
//!
//! # Overview
//!
//! The browser frontend is a separately hosted static bundle; this
//! crate is everything that runs on the server. Accounts are the only
//! persistent state. Logging in proves a credential pair and returns
//! the account's public fields - there are no sessions, tokens, or
//! protected resources behind it.
//!
//! # Module Structure
//!
//! The library is organized into five modules:
//!
//! - **`server`** - Configuration, shared state, database bootstrap,
//!   and router assembly
//! - **`routes`** - Route tables, the CORS layer, and the 404 fallback
//! - **`accounts`** - Register/login handlers and the `users` table store
//! - **`content`** - Article aggregation, the video catalog, and form relays
//! - **`error`** - The service error type and its JSON response mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use recharge_site::server::config::ServerConfig;
//! use recharge_site::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = ServerConfig::default();
//! let (app, db_pool) = create_app(&config).await?;
//! // Serve `app`, then close `db_pool` on shutdown
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ServiceError>`; every error variant maps
//! to a fixed status code and a fixed `{"error": ...}` body. Invalid
//! login credentials are reported identically whether the email is
//! unknown or the password is wrong.
//!
//! # Thread Safety
//!
//! Shared state is two pool-like handles (the sqlx pool and the reqwest
//! client); there is no application-level locking. SQLite serializes
//! concurrent writes itself, and the UNIQUE constraint on `users.email`
//! arbitrates racing registrations.

/// Configuration, state, and server startup
pub mod server;

/// Route configuration
pub mod routes;

/// Account registration and login
pub mod accounts;

/// Articles, videos, and form relays
pub mod content;

/// Service errors and response conversion
pub mod error;

// Re-export the error type; handlers and tests name it constantly
pub use error::ServiceError;
