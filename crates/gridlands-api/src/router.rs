//! Axum router construction for the map query API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin map-frontend access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use gridlands_db::GridStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the query API.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/world` -- the world record
/// - `POST /api/world/generate` -- idempotent generation trigger
/// - `GET /api/tiles` -- full map listing
/// - `GET /api/tiles/around` -- bounding-box query
///
/// CORS allows any origin for development; restrict it in production.
pub fn build_router<S: GridStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index::<S>))
        // REST API
        .route("/api/world", get(handlers::get_world::<S>))
        .route("/api/world/generate", post(handlers::generate::<S>))
        .route("/api/tiles", get(handlers::list_tiles::<S>))
        .route("/api/tiles/around", get(handlers::tiles_around::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
