//! Integration tests for the map query API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, driving the real handlers against the in-memory
//! grid store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gridlands_api::router::build_router;
use gridlands_api::state::AppState;
use gridlands_core::config::{PlacementConfig, QueryConfig, WorldConfig};
use gridlands_db::MemoryGrid;
use gridlands_world::ReservationSet;
use serde_json::Value;
use tower::ServiceExt;

/// State over an empty in-memory grid: size-40 world, deep scatter budget
/// so the generation trigger cannot plausibly exhaust it.
fn make_test_router() -> Router {
    let world = WorldConfig {
        name: String::from("Testworld"),
        size: 40,
        seed: Some(5),
        npc_village_count: 20,
    };
    let placement = PlacementConfig {
        max_attempts: 500,
        ..PlacementConfig::default()
    };
    let state = Arc::new(AppState::new(
        MemoryGrid::new(),
        Arc::new(ReservationSet::new()),
        world,
        placement,
        QueryConfig::default(),
    ));
    build_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_generate(router: &Router) -> Value {
    let response = router
        .clone()
        .oneshot(
            Request::post("/api/world/generate")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

#[tokio::test]
async fn index_returns_html() {
    let router = make_test_router();

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn world_is_404_before_generation() {
    let router = make_test_router();

    let response = router
        .oneshot(Request::get("/api/world").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn generate_then_query_world() {
    let router = make_test_router();

    let outcome = post_generate(&router).await;
    assert_eq!(outcome["outcome"], "generated");
    assert_eq!(outcome["tilesCreated"], 1600);

    let response = router
        .oneshot(Request::get("/api/world").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "Testworld");
    assert_eq!(json["size"], 40);
}

#[tokio::test]
async fn second_generate_is_skipped() {
    let router = make_test_router();

    let first = post_generate(&router).await;
    assert_eq!(first["outcome"], "generated");

    let second = post_generate(&router).await;
    assert_eq!(second["outcome"], "skipped");
    assert!(second["createdAt"].is_string());
}

#[tokio::test]
async fn list_tiles_returns_full_grid() {
    let router = make_test_router();
    post_generate(&router).await;

    let response = router
        .oneshot(Request::get("/api/tiles").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let tiles = json.as_array().unwrap();
    assert_eq!(tiles.len(), 1600);
    // Summary rows expose the wire field names.
    let first = tiles.first().unwrap();
    assert!(first["x"].is_number());
    assert!(first["type"].is_string());
    assert!(first["race"].is_string());
}

#[tokio::test]
async fn around_query_radius_one_returns_nine_tiles() {
    let router = make_test_router();
    post_generate(&router).await;

    let response = router
        .oneshot(
            Request::get("/api/tiles/around?x=0&y=0&radius=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn around_query_beyond_extent_is_rejected() {
    let router = make_test_router();
    post_generate(&router).await;

    // Half extent is 20; 21 is out of bounds.
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/tiles/around?x=21&y=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);

    // The edge itself passes the closed bound and yields a clipped box.
    let response = router
        .oneshot(
            Request::get("/api/tiles/around?x=20&y=0&radius=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    // Only x = 19 exists on that side: a 1x3 strip.
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn around_query_uses_default_radius() {
    let router = make_test_router();
    post_generate(&router).await;

    let response = router
        .oneshot(
            Request::get("/api/tiles/around?x=0&y=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    // Default radius 20 around the origin clips to the 40x40 grid: x and y
    // both span [-20, 19], a full 40x40 block.
    assert_eq!(json.as_array().unwrap().len(), 1600);
}
