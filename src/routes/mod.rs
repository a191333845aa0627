//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation, CORS layer, and 404 fallback
//! - **`api_routes`** - API endpoints (accounts, content, form relays)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint handlers
//! ```
//!
//! # Routes
//!
//! - `POST /api/register` - Account registration
//! - `POST /api/login` - Account login
//! - `GET /api/articles` - Aggregated article list
//! - `GET /api/videos` - Curated video catalog
//! - `POST /api/contact` - Contact form relay
//! - `POST /api/subscribe` - Newsletter signup relay
//!
//! Anything else falls through to a plain-text 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
