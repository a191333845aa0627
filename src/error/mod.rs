//! Service Error Module
//!
//! This module defines the error types returned by the HTTP API and their
//! conversion into JSON error responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and status/message mapping
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! All service errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers. The response body is always
//! `{"error": <message>}` with the status code fixed per variant.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ServiceError;
