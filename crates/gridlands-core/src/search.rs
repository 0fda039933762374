//! Bounded tile searches over the grid store.
//!
//! Two search shapes, sharing the reservation set so concurrent searches in
//! one process never hand out the same coordinate before the store write
//! lands:
//!
//! - [`TileSearch::find_valid`] -- rejection sampling from a disk around the
//!   world center, for whole-world scatter (NPC placement).
//! - [`TileSearch::find_empty_near`] -- an expanding square search around an
//!   anchor, for "next to this outpost" placement (player villages).
//!
//! Both bound their work by attempt or radius caps rather than wall-clock
//! timeouts; exhaustion is a typed failure the caller decides about.

use gridlands_db::GridStore;
use gridlands_types::{Coordinate, Tile, TileKind};
use gridlands_world::geometry;
use gridlands_world::reserve::ReservationSet;
use gridlands_world::sampling;
use rand::Rng;

use crate::error::PlacementError;

/// Search operations bound to one grid, reservation set, and world extent.
pub struct TileSearch<'a, S> {
    grid: &'a S,
    reserved: &'a ReservationSet,
    half_extent: i32,
}

impl<'a, S: GridStore> TileSearch<'a, S> {
    /// Bind a search to a grid store and reservation set.
    pub const fn new(grid: &'a S, reserved: &'a ReservationSet, half_extent: i32) -> Self {
        Self {
            grid,
            reserved,
            half_extent,
        }
    }

    /// Rejection-sample a coordinate around the world center until
    /// `predicate` accepts the tile found there.
    ///
    /// Each loop iteration consumes one attempt. Out-of-bounds samples and
    /// coordinates already in the reservation set are rejected before the
    /// store is consulted; the tile lookup happens only after both filters
    /// pass. An accepted coordinate is reserved immediately, before it is
    /// returned.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NoValidTile`] after `max_attempts` rejections, or
    /// [`PlacementError::Db`] if a lookup fails.
    pub async fn find_valid<R, F>(
        &self,
        rng: &mut R,
        max_attempts: u32,
        scatter_radius: f64,
        predicate: F,
    ) -> Result<Coordinate, PlacementError>
    where
        R: Rng,
        F: Fn(Option<&Tile>, Coordinate) -> bool,
    {
        let center = Coordinate::new(0, 0);
        for _ in 0..max_attempts {
            let coord = sampling::sample_polar(rng, center, scatter_radius);
            if !coord.within_extent(self.half_extent) {
                continue;
            }
            if self.reserved.contains(coord) {
                continue;
            }
            let tile = self.grid.tile_at(coord).await?;
            if predicate(tile.as_ref(), coord) {
                self.reserved.reserve(coord);
                return Ok(coord);
            }
        }
        Err(PlacementError::NoValidTile {
            attempts: max_attempts,
        })
    }

    /// Find the first empty, unreserved tile in an expanding square around
    /// `origin`, reserving and returning it.
    ///
    /// Each radius step scans the full `(2r+1)^2` block, not just the new
    /// ring, so inner cells are re-visited at every step. Redundant, but it
    /// keeps the scan order simple and the blocks are small; scanning only
    /// the ring boundary is the obvious optimization if this ever shows up
    /// in a profile.
    ///
    /// # Errors
    ///
    /// [`PlacementError::NoNearbyTile`] if no radius up to `max_radius`
    /// yields a hit, or [`PlacementError::Db`] if a lookup fails.
    pub async fn find_empty_near(
        &self,
        origin: Coordinate,
        max_radius: i32,
    ) -> Result<Coordinate, PlacementError> {
        for radius in 1..=max_radius {
            let span = radius.saturating_neg()..=radius;
            for dx in span.clone() {
                for dy in span.clone() {
                    let coord = origin.translated(dx, dy);
                    if !coord.within_extent(self.half_extent) {
                        continue;
                    }
                    if self.reserved.contains(coord) {
                        continue;
                    }
                    let Some(tile) = self.grid.tile_at(coord).await? else {
                        continue;
                    };
                    if tile.kind == TileKind::Empty {
                        self.reserved.reserve(coord);
                        return Ok(coord);
                    }
                }
            }
        }
        Err(PlacementError::NoNearbyTile { origin, max_radius })
    }

}

/// The predicate used for NPC scatter: the tile exists, is empty, and keeps
/// `clearance` distance from every hub.
pub fn scatter_predicate(
    hubs: &[Coordinate],
    clearance: f64,
) -> impl Fn(Option<&Tile>, Coordinate) -> bool + '_ {
    move |tile, coord| {
        tile.is_some_and(|t| t.kind == TileKind::Empty)
            && !geometry::is_near_any(coord, hubs, clearance)
    }
}
