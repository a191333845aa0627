/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the API routes, the CORS layer, and the 404 fallback into a single
 * Axum router.
 *
 * # CORS
 *
 * The browser frontend is served separately (a static bundle on its own
 * origin), so every API route answers cross-origin requests. The CORS
 * layer is fully permissive: any origin, method, and headers.
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and
///   content client
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## API Routes
///
/// - `POST /api/register` - Account registration
/// - `POST /api/login` - Account login
/// - `GET /api/articles` - Aggregated article list
/// - `GET /api/videos` - Curated video catalog
/// - `POST /api/contact` - Contact form relay
/// - `POST /api/subscribe` - Newsletter signup relay
///
/// ## Fallback
///
/// The fallback handler returns a plain-text 404 for unknown routes.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // CORS applies to every route, the fallback included
    let router = router.layer(CorsLayer::permissive());

    // Use AppState as router state
    router.with_state(app_state)
}
