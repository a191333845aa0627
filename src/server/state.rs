/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The SQLite connection pool backing the account endpoints
 * - The HTTP client for the upstream content services
 *
 * # Thread Safety
 *
 * Both fields are pool-like handles that are cheap to clone and safe to
 * share; no locking happens at this layer. Handlers acquire database
 * connections from the pool per request and release them when done.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they use: account handlers take `State<SqlitePool>`,
 * content handlers take `State<ContentClient>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::content::client::ContentClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Client for the upstream content services
    pub content: ContentClient,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, content: ContentClient) -> Self {
        Self { db_pool, content }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> SqlitePool {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for ContentClient {
    fn from_ref(app_state: &AppState) -> ContentClient {
        app_state.content.clone()
    }
}
