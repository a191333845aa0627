//! Content Module
//!
//! Wellness content served alongside the account endpoints: an
//! aggregated article list, a curated video catalog, and relays for the
//! site's contact and newsletter forms.
//!
//! # Architecture
//!
//! ```text
//! content/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - HTTP client for the upstream catalogs and form service
//! ├── articles.rs - Article aggregation (GET /api/articles)
//! ├── videos.rs   - Curated video catalog (GET /api/videos)
//! └── contact.rs  - Contact and newsletter form relays
//! ```
//!
//! # Endpoints
//!
//! - **`get_articles`** - GET /api/articles - Combined sports/fitness/built-in articles
//! - **`get_videos`** - GET /api/videos - Fixed video catalog
//! - **`submit_contact`** - POST /api/contact - Validate and relay a contact message
//! - **`subscribe_newsletter`** - POST /api/subscribe - Validate and relay a signup
//!
//! None of these touch the database. The article list degrades to its
//! built-in entries when the upstream catalogs fail; the video catalog
//! cannot fail.

/// HTTP client for upstream content services
pub mod client;

/// Article aggregation
pub mod articles;

/// Curated video catalog
pub mod videos;

/// Contact and newsletter form relays
pub mod contact;

// Re-export commonly used items
pub use articles::{get_articles, Article};
pub use client::{ContentClient, ContentEndpoints};
pub use contact::{submit_contact, subscribe_newsletter};
pub use videos::{get_videos, Video};
