//! Shared application state for the map query API.
//!
//! [`AppState`] bundles the grid store with the configuration the handlers
//! need: world identity (for the generation trigger), placement budgets,
//! and query defaults. It is wrapped in [`std::sync::Arc`] and injected via
//! Axum's `State` extractor.

use std::sync::Arc;

use gridlands_core::config::{PlacementConfig, QueryConfig, WorldConfig};
use gridlands_types::half_extent;
use gridlands_world::ReservationSet;

/// Shared state for the Axum application, generic over the grid store.
pub struct AppState<S> {
    /// The grid store all reads and the generation trigger run against.
    pub grid: S,
    /// Reservation set shared with the allocation path, so a manual
    /// generation trigger respects in-flight claims.
    pub reserved: Arc<ReservationSet>,
    /// World identity and generation parameters.
    pub world: WorldConfig,
    /// Search and placement budgets for the generation trigger.
    pub placement: PlacementConfig,
    /// Read-query defaults.
    pub query: QueryConfig,
}

impl<S> AppState<S> {
    /// Bundle a grid store with its configuration.
    pub const fn new(
        grid: S,
        reserved: Arc<ReservationSet>,
        world: WorldConfig,
        placement: PlacementConfig,
        query: QueryConfig,
    ) -> Self {
        Self {
            grid,
            reserved,
            world,
            placement,
            query,
        }
    }

    /// Half extent of the configured world.
    pub fn half_extent(&self) -> i32 {
        half_extent(self.world.size)
    }
}
