//! Common test utilities and helpers
//!
//! Shared fixtures for the API integration tests:
//! - A SQLite database in a temp directory, bootstrapped like production
//! - A test server over the full router, with overridable upstream endpoints

// Each integration test binary compiles this module and uses a subset
// of the helpers.
#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use tempfile::TempDir;

use recharge_site::content::client::{ContentClient, ContentEndpoints};
use recharge_site::routes::router::create_router;
use recharge_site::server::config::ServerConfig;
use recharge_site::server::init::connect_database;
use recharge_site::server::state::AppState;

/// Test database fixture
///
/// Owns the temp directory holding the database file, so the file lives
/// as long as the fixture and disappears afterwards.
pub struct TestDatabase {
    pool: SqlitePool,
    dir: TempDir,
}

impl TestDatabase {
    /// Create a fresh database file with the schema bootstrapped, using
    /// the same startup path as the real server
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = ServerConfig {
            database_file: dir.path().join("users.db"),
            ..ServerConfig::default()
        };
        let pool = connect_database(&config).await.expect("test database");
        Self { pool, dir }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Path of the database file, for reopen tests
    pub fn database_file(&self) -> std::path::PathBuf {
        self.dir.path().join("users.db")
    }
}

/// Endpoints pointing at a closed port; fine for tests that never
/// touch the content routes
pub fn offline_endpoints() -> ContentEndpoints {
    ContentEndpoints {
        sports_catalog: "http://127.0.0.1:1/sports".to_string(),
        exercise_catalog: "http://127.0.0.1:1/exercises".to_string(),
        contact_form: "http://127.0.0.1:1/contact".to_string(),
        newsletter_form: "http://127.0.0.1:1/newsletter".to_string(),
    }
}

/// Build a test server from an existing pool
pub fn server_for(pool: SqlitePool, endpoints: ContentEndpoints) -> TestServer {
    let state = AppState::new(pool, ContentClient::new(endpoints));
    TestServer::new(create_router(state)).expect("test server")
}

/// Build a test server over the fixture's database
pub fn create_test_server(db: &TestDatabase, endpoints: ContentEndpoints) -> TestServer {
    server_for(db.pool().clone(), endpoints)
}
