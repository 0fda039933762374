//! In-memory grid store.
//!
//! Backs the generator, allocation, and API unit tests, which exercise the
//! engine's full behavior without a live database. Iteration order is
//! deterministic (`BTreeMap` keyed by coordinate), so tests that depend on
//! scan order are stable.
//!
//! Semantics mirror [`crate::PgGrid`] exactly -- in particular
//! [`GridStore::claim_if_empty`] checks-and-writes under one lock, so race
//! behavior is observable in tests too.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use gridlands_types::{
    Coordinate, Tile, TileKind, TileSummary, TileView, TileWrite, World,
};
use uuid::Uuid;

use crate::error::DbError;
use crate::grid::GridStore;

/// A [`GridStore`] holding everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryGrid {
    tiles: Mutex<BTreeMap<Coordinate, Tile>>,
    world: Mutex<Option<World>>,
}

impl MemoryGrid {
    /// Create an empty in-memory grid.
    pub fn new() -> Self {
        Self::default()
    }

    fn tiles_lock(&self) -> MutexGuard<'_, BTreeMap<Coordinate, Tile>> {
        self.tiles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn world_lock(&self) -> MutexGuard<'_, Option<World>> {
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a write to a tile in place.
    fn apply(tile: &mut Tile, write: &TileWrite) {
        tile.name = write.name.clone();
        tile.kind = write.kind;
        tile.race = write.race.clone();
        tile.player_id = write.player_id.clone();
        tile.player_name = write.player_name.clone();
        tile.metadata = write.metadata.clone();
    }
}

impl GridStore for MemoryGrid {
    async fn create_tiles(&self, tiles: &[Tile]) -> Result<u64, DbError> {
        let mut map = self.tiles_lock();
        for tile in tiles {
            map.insert(tile.coord, tile.clone());
        }
        Ok(u64::try_from(tiles.len()).unwrap_or(u64::MAX))
    }

    async fn tile_at(&self, coord: Coordinate) -> Result<Option<Tile>, DbError> {
        Ok(self.tiles_lock().get(&coord).cloned())
    }

    async fn update_tile(&self, coord: Coordinate, write: &TileWrite) -> Result<(), DbError> {
        let mut map = self.tiles_lock();
        let tile = map.get_mut(&coord).ok_or(DbError::MissingTile(coord))?;
        Self::apply(tile, write);
        Ok(())
    }

    async fn claim_if_empty(&self, coord: Coordinate, write: &TileWrite) -> Result<bool, DbError> {
        let mut map = self.tiles_lock();
        match map.get_mut(&coord) {
            Some(tile) if tile.kind == TileKind::Empty => {
                Self::apply(tile, write);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn outposts_for_race(&self, race: &str) -> Result<Vec<Tile>, DbError> {
        Ok(self
            .tiles_lock()
            .values()
            .filter(|t| t.kind == TileKind::Outpost && t.race == race)
            .cloned()
            .collect())
    }

    async fn list_tiles(&self) -> Result<Vec<TileSummary>, DbError> {
        Ok(self
            .tiles_lock()
            .values()
            .map(|t| TileSummary {
                x: t.coord.x,
                y: t.coord.y,
                kind: t.kind,
                race: t.race.clone(),
                name: t.name.clone(),
            })
            .collect())
    }

    async fn tiles_in_box(
        &self,
        center: Coordinate,
        radius: i32,
    ) -> Result<Vec<TileView>, DbError> {
        let min_x = center.x.saturating_sub(radius);
        let max_x = center.x.saturating_add(radius);
        let min_y = center.y.saturating_sub(radius);
        let max_y = center.y.saturating_add(radius);
        Ok(self
            .tiles_lock()
            .values()
            .filter(|t| {
                t.coord.x >= min_x && t.coord.x <= max_x && t.coord.y >= min_y && t.coord.y <= max_y
            })
            .map(|t| TileView {
                x: t.coord.x,
                y: t.coord.y,
                name: t.name.clone(),
                kind: t.kind,
                race: t.race.clone(),
                player_name: t.player_name.clone(),
            })
            .collect())
    }

    async fn count_tiles(&self) -> Result<u64, DbError> {
        Ok(u64::try_from(self.tiles_lock().len()).unwrap_or(u64::MAX))
    }

    async fn delete_all_tiles(&self) -> Result<u64, DbError> {
        let mut map = self.tiles_lock();
        let removed = u64::try_from(map.len()).unwrap_or(u64::MAX);
        map.clear();
        Ok(removed)
    }

    async fn world(&self) -> Result<Option<World>, DbError> {
        Ok(self.world_lock().clone())
    }

    async fn create_world(&self, name: &str, size: u32) -> Result<World, DbError> {
        let record = World {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            size,
            created_at: Utc::now(),
        };
        *self.world_lock() = Some(record.clone());
        Ok(record)
    }
}
