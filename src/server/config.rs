/**
 * Server Configuration
 *
 * This module defines the server's runtime configuration: the listen
 * port, the SQLite database file, and the upstream content endpoints.
 *
 * # Fixed Constants
 *
 * Port and storage location are fixed constants, not configuration:
 * there are no environment variables or CLI flags that change them.
 * The only environment input the server honors is `RUST_LOG`, which
 * selects the log filter and nothing else.
 *
 * Tests construct `ServerConfig` directly to point the database at a
 * temp directory and the content handlers at mock upstreams.
 */

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::content::client::ContentEndpoints;

/// TCP port the server listens on
pub const DEFAULT_PORT: u16 = 5000;

/// SQLite database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "users.db";

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to bind
    pub port: u16,
    /// Path of the SQLite database file; created on first start
    pub database_file: PathBuf,
    /// Upstream endpoints for the content handlers
    pub content: ContentEndpoints,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_file: PathBuf::from(DEFAULT_DATABASE_FILE),
            content: ContentEndpoints::default(),
        }
    }
}

impl ServerConfig {
    /// Socket address the server binds, on all interfaces
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
