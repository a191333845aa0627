/**
 * Recharge Server Entry Point
 *
 * This is the main entry point for the Recharge backend server.
 * It loads configuration, opens the SQLite database, and serves the
 * API until interrupted.
 */

use recharge_site::server::config::ServerConfig;
use recharge_site::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Port and database file are fixed constants
    let config = ServerConfig::default();

    // Create the Axum app; keep the pool for a clean shutdown
    let (app, db_pool) = create_app(&config).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);

    // Run the server until Ctrl-C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // In-flight requests are done; release the database file
    db_pool.close().await;
    tracing::info!("Database closed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }
}
