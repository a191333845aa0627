//! Server Module
//!
//! Configuration, shared state, and startup for the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Runtime configuration (port, database file, endpoints)
//! ├── state.rs  - Shared application state and FromRef extraction
//! └── init.rs   - Database bootstrap and router assembly
//! ```

/// Runtime configuration
pub mod config;

/// Database bootstrap and router assembly
pub mod init;

/// Shared application state
pub mod state;

// Re-export commonly used items
pub use config::ServerConfig;
pub use init::{connect_database, create_app};
pub use state::AppState;
