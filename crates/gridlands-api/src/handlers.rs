//! REST endpoint handlers for the map query API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/world` | The world record |
//! | `POST` | `/api/world/generate` | Idempotent generation trigger |
//! | `GET` | `/api/tiles` | All tiles (x, y, type, race, name) |
//! | `GET` | `/api/tiles/around` | Tiles in a bounding box |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use gridlands_core::generator::{self, GenerationOutcome};
use gridlands_db::GridStore;
use gridlands_types::{Coordinate, TileSummary, TileView, World};
use gridlands_world::static_factions;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/tiles/around`.
#[derive(Debug, serde::Deserialize)]
pub struct AroundQuery {
    /// Box center x.
    pub x: i32,
    /// Box center y.
    pub y: i32,
    /// Box radius; the configured default when omitted.
    pub radius: Option<i32>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing world status and API links.
pub async fn index<S: GridStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let world = state.grid.world().await?;
    let tile_count = state.grid.count_tiles().await?;
    let (world_name, generated_at) = world.map_or_else(
        || (String::from("--"), String::from("not generated")),
        |w| (w.name, w.created_at.to_rfc3339()),
    );

    Ok(Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Gridlands World Engine</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
    </style>
</head>
<body>
    <h1>Gridlands World Engine</h1>

    <div>
        <div class="metric">
            <div class="label">World</div>
            <div class="value">{world_name}</div>
        </div>
        <div class="metric">
            <div class="label">Tiles</div>
            <div class="value">{tile_count}</div>
        </div>
        <div class="metric">
            <div class="label">Generated</div>
            <div class="value">{generated_at}</div>
        </div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/world">/api/world</a> -- the world record</li>
        <li>POST /api/world/generate -- idempotent generation trigger</li>
        <li>GET <a href="/api/tiles">/api/tiles</a> -- all tiles</li>
        <li>GET <a href="/api/tiles/around?x=0&amp;y=0">/api/tiles/around?x=0&amp;y=0&amp;radius=20</a> -- tiles in a box</li>
    </ul>
</body>
</html>"#
    )))
}

// ---------------------------------------------------------------------------
// GET /api/world -- the world record
// ---------------------------------------------------------------------------

/// Return the world record, or 404 before generation has run.
pub async fn get_world<S: GridStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<World>, ApiError> {
    let world = state
        .grid
        .world()
        .await?
        .ok_or_else(|| ApiError::NotFound(String::from("world not generated yet")))?;
    Ok(Json(world))
}

// ---------------------------------------------------------------------------
// POST /api/world/generate -- idempotent generation trigger
// ---------------------------------------------------------------------------

/// Run world generation. A no-op (reported as `skipped`) when a world
/// already exists.
pub async fn generate<S: GridStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<GenerationOutcome>, ApiError> {
    let catalog = static_factions(state.world.size)
        .map_err(|e| ApiError::Generation(e.to_string()))?;
    let mut rng = generator::scatter_rng(state.world.seed);

    let outcome = generator::generate_world(
        &state.grid,
        &state.reserved,
        &mut rng,
        &state.world,
        &state.placement,
        &catalog,
    )
    .await
    .map_err(|e| ApiError::Generation(e.to_string()))?;

    Ok(Json(outcome))
}

// ---------------------------------------------------------------------------
// GET /api/tiles -- full map listing
// ---------------------------------------------------------------------------

/// Return every tile as a summary row.
pub async fn list_tiles<S: GridStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<TileSummary>>, ApiError> {
    Ok(Json(state.grid.list_tiles().await?))
}

// ---------------------------------------------------------------------------
// GET /api/tiles/around -- bounding-box query
// ---------------------------------------------------------------------------

/// Return tiles within the axis-aligned box around the given center.
///
/// Rejects centers beyond the world extent with a 400. The extent check is
/// the closed bound `|x| <= H` -- the world edge itself passes and simply
/// yields a clipped box.
pub async fn tiles_around<S: GridStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<AroundQuery>,
) -> Result<Json<Vec<TileView>>, ApiError> {
    let center = Coordinate::new(params.x, params.y);
    if !center.within_extent(state.half_extent()) {
        return Err(ApiError::OutOfBounds);
    }

    let radius = params.radius.unwrap_or(state.query.default_radius);
    Ok(Json(state.grid.tiles_in_box(center, radius).await?))
}
