//! Map query API for the Gridlands world engine.
//!
//! An Axum HTTP server exposing the read/query surface of the world:
//!
//! - **REST endpoints** for the full tile listing, the bounding-box
//!   around-query, and the world record
//! - **A manual generation trigger** (`POST /api/world/generate`), safe to
//!   call at any time thanks to the generator's idempotency guard
//! - **A minimal HTML status page** (`GET /`) showing the world record,
//!   tile count, and endpoint links
//!
//! # Architecture
//!
//! Every read goes to the grid store -- there is no in-memory mirror, so
//! queries see allocations as soon as their claims commit, and readers
//! never block the allocation path. Handlers are generic over
//! [`GridStore`](gridlands_db::GridStore); route tests drive the router
//! against the in-memory grid.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, spawn_server, start_server};
pub use state::AppState;
