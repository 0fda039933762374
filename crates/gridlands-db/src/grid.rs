//! The [`GridStore`] trait: the seam between engine logic and storage.
//!
//! Generation, allocation, and the query API are written against this
//! trait; [`crate::PgGrid`] is the production implementation and
//! [`crate::MemoryGrid`] backs unit tests. Methods return `Send` futures
//! so callers can be driven from spawned tasks.
//!
//! The one semantically load-bearing method is [`GridStore::claim_if_empty`]:
//! an atomic claim-if-still-empty conditional update. Every settlement
//! claim (NPC scatter and player allocation alike) goes through it, so a
//! race between two writers is detected at the store instead of silently
//! overwriting -- the in-memory reservation set only narrows the window.

use std::future::Future;

use gridlands_types::{Coordinate, Tile, TileSummary, TileView, TileWrite, World};

use crate::error::DbError;

/// Persistent storage of the tile grid and the world record.
pub trait GridStore: Send + Sync {
    /// Bulk-insert tiles. Returns the number of rows written.
    fn create_tiles(&self, tiles: &[Tile]) -> impl Future<Output = Result<u64, DbError>> + Send;

    /// Fetch the tile at a coordinate, if one exists.
    fn tile_at(
        &self,
        coord: Coordinate,
    ) -> impl Future<Output = Result<Option<Tile>, DbError>> + Send;

    /// Overwrite the mutable portion of the tile at `coord`,
    /// unconditionally.
    ///
    /// Used for catalog structures whose coordinates are pre-validated.
    /// Fails with [`DbError::MissingTile`] if no row exists there.
    fn update_tile(
        &self,
        coord: Coordinate,
        write: &TileWrite,
    ) -> impl Future<Output = Result<(), DbError>> + Send;

    /// Atomically apply `write` to the tile at `coord` only if it is still
    /// empty. Returns `false` when the tile was already claimed -- the
    /// caller lost a race and must not treat the coordinate as its own.
    fn claim_if_empty(
        &self,
        coord: Coordinate,
        write: &TileWrite,
    ) -> impl Future<Output = Result<bool, DbError>> + Send;

    /// All outpost tiles belonging to the given race.
    fn outposts_for_race(
        &self,
        race: &str,
    ) -> impl Future<Output = Result<Vec<Tile>, DbError>> + Send;

    /// The full-map projection: every tile as a [`TileSummary`].
    fn list_tiles(&self) -> impl Future<Output = Result<Vec<TileSummary>, DbError>> + Send;

    /// Tiles within the axis-aligned box of `radius` around `center`.
    fn tiles_in_box(
        &self,
        center: Coordinate,
        radius: i32,
    ) -> impl Future<Output = Result<Vec<TileView>, DbError>> + Send;

    /// Number of tile rows.
    fn count_tiles(&self) -> impl Future<Output = Result<u64, DbError>> + Send;

    /// Delete every tile row. Returns the number of rows removed.
    fn delete_all_tiles(&self) -> impl Future<Output = Result<u64, DbError>> + Send;

    /// The world record, if generation has run.
    fn world(&self) -> impl Future<Output = Result<Option<World>, DbError>> + Send;

    /// Create the world record.
    fn create_world(
        &self,
        name: &str,
        size: u32,
    ) -> impl Future<Output = Result<World, DbError>> + Send;
}
