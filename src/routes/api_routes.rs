/**
 * API Route Handlers
 *
 * This module defines route handlers for the API endpoints:
 * - Account endpoints (register, login)
 * - Content endpoints (articles, videos)
 * - Form relay endpoints (contact, subscribe)
 *
 * # Routes
 *
 * ## Accounts
 * - `POST /api/register` - Account registration
 * - `POST /api/login` - Account login
 *
 * ## Content
 * - `GET /api/articles` - Aggregated article list
 * - `GET /api/videos` - Curated video catalog
 *
 * ## Form Relays
 * - `POST /api/contact` - Contact form relay
 * - `POST /api/subscribe` - Newsletter signup relay
 */

use axum::Router;

use crate::accounts::handlers::{login, register};
use crate::content::{get_articles, get_videos, submit_contact, subscribe_newsletter};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Every route is public. Login returns account fields but no token;
/// nothing here checks headers beyond content type.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Account endpoints
        .route(
            "/api/register",
            axum::routing::post(register),
        )
        .route(
            "/api/login",
            axum::routing::post(login),
        )
        // Content endpoints
        .route(
            "/api/articles",
            axum::routing::get(get_articles),
        )
        .route(
            "/api/videos",
            axum::routing::get(get_videos),
        )
        // Form relay endpoints
        .route(
            "/api/contact",
            axum::routing::post(submit_contact),
        )
        .route(
            "/api/subscribe",
            axum::routing::post(subscribe_newsletter),
        )
}
