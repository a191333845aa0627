/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: opening the SQLite database, bootstrapping the schema, and
 * assembling the router with its state.
 *
 * # Initialization Process
 *
 * 1. Open (or create) the SQLite database file
 * 2. Create the `users` table if it does not exist
 * 3. Build the upstream content client
 * 4. Create the router with the shared state
 *
 * # Restarts
 *
 * Startup is idempotent: an existing database file is opened as-is and
 * the CREATE TABLE IF NOT EXISTS leaves its rows untouched, so accounts
 * survive restarts.
 */

use axum::Router;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use crate::accounts::store::ensure_schema;
use crate::content::client::ContentClient;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Open the SQLite database and make sure the schema exists
///
/// The file is created on first start. The pool's connections lazily
/// attach to the same file, so concurrent handlers each get their own
/// connection while SQLite serializes the writes.
///
/// # Arguments
///
/// * `config` - Server configuration naming the database file
///
/// # Returns
///
/// A ready-to-use pool, or the sqlx error that prevented opening it
pub async fn connect_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!(
        "Opening SQLite database at {}",
        config.database_file.display()
    );

    let options = SqliteConnectOptions::new()
        .filename(&config.database_file)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;
    ensure_schema(&pool).await?;

    tracing::info!("Database ready");

    Ok(pool)
}

/// Create and configure the Axum application
///
/// # Returns
///
/// The configured router plus the database pool, so the caller can
/// close the pool cleanly after the server stops.
///
/// # Errors
///
/// Fails only if the database cannot be opened or the schema cannot be
/// created; the content client performs no I/O at construction time.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, SqlitePool), sqlx::Error> {
    tracing::info!("Initializing server");

    // Step 1: Open SQLite and bootstrap the schema
    let db_pool = connect_database(config).await?;

    // Step 2: Build the upstream content client
    let content = ContentClient::new(config.content.clone());

    // Step 3: Create app state and router
    let app_state = AppState::new(db_pool.clone(), content);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok((app, db_pool))
}
