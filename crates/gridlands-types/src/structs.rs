//! Core entity structs for the Gridlands world engine.
//!
//! Covers the tile row and its write form, the metadata payloads stored in
//! the tile `metadata` column, the singleton world record, the read-side
//! projections served by the map API, and the static faction catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::coord::Coordinate;
use crate::enums::{Difficulty, ExpansionReward, OutpostKind, TileKind, Zone};

// ---------------------------------------------------------------------------
// Well-known race and owner sentinels
// ---------------------------------------------------------------------------

/// Sentinel values for the tile `race` column.
///
/// Faction names are open-ended catalog data, so `race` is a plain string;
/// these constants mark the two reserved non-faction values.
pub mod races {
    /// No race: empty, unclaimed ground.
    pub const NONE: &str = "NONE";
    /// The neutral race owning NPC bandit camps.
    pub const NEUTRAL: &str = "NEUTRAL";
}

/// Sentinel values for the tile owner columns.
pub mod owners {
    /// Owner of every tile not claimed by a player.
    pub const SYSTEM: &str = "SYSTEM";
}

// ---------------------------------------------------------------------------
// Tile metadata payloads
// ---------------------------------------------------------------------------

/// Fixed loot carried by an NPC village, scaled by zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LootTable {
    /// Wood awarded when the camp is cleared.
    pub wood: u32,
    /// Gold awarded when the camp is cleared.
    pub gold: u32,
}

/// Metadata stamped on NPC village tiles at generation time.
///
/// Field values come from the zone metadata table -- they are game-balance
/// constants, not computed quantities. Optional fields are omitted from the
/// JSON entirely when absent, matching what the village service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct NpcMetadata {
    /// The difficulty zone the camp was placed in.
    pub zone: Zone,
    /// Combat difficulty, fixed per zone.
    pub difficulty: Difficulty,
    /// Loot granted for clearing the camp.
    pub loot: LootTable,
    /// Expansion bonus, absent in the core zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion_reward: Option<ExpansionReward>,
    /// Whether clearing the camp fires a world event (outer zone only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_trigger: Option<bool>,
}

/// Metadata stamped on faction outpost tiles at generation time.
///
/// Hubs carry the faction description and traits; satellite outposts carry
/// only their declared sub-type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct OutpostMetadata {
    /// The outpost's role within its faction.
    pub outpost_type: OutpostKind,
    /// Faction flavor text (hubs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Faction trait list (hubs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<String>>,
}

/// The typed forms a tile `metadata` column can take.
///
/// Stored as untagged JSON: the two variants are distinguished by their
/// required fields (`outpostType` vs `zone`), so no discriminant is needed
/// on the wire and existing consumers keep reading the same shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(untagged)]
pub enum TileMetadata {
    /// A faction structure (hub or satellite).
    Outpost(OutpostMetadata),
    /// An NPC bandit camp.
    Npc(NpcMetadata),
}

// ---------------------------------------------------------------------------
// Tiles
// ---------------------------------------------------------------------------

/// One cell of the world grid, uniquely keyed by its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Grid position, the primary key.
    pub coord: Coordinate,
    /// Display name (`"(x,y)"` for empty ground, settlement name otherwise).
    pub name: String,
    /// What occupies the tile.
    pub kind: TileKind,
    /// Owning faction name, or a [`races`] sentinel.
    pub race: String,
    /// Owning player id, [`owners::SYSTEM`] when unclaimed.
    pub player_id: String,
    /// Owning player display name, [`owners::SYSTEM`] when unclaimed.
    pub player_name: String,
    /// Structured payload; `None` for empty tiles.
    pub metadata: Option<TileMetadata>,
}

impl Tile {
    /// A fresh empty tile at the given coordinate, owned by the system.
    pub fn empty(coord: Coordinate) -> Self {
        Self {
            coord,
            name: format!("({},{})", coord.x, coord.y),
            kind: TileKind::Empty,
            race: races::NONE.to_owned(),
            player_id: owners::SYSTEM.to_owned(),
            player_name: owners::SYSTEM.to_owned(),
            metadata: None,
        }
    }
}

/// The mutable portion of a tile, applied by stamp and claim operations.
///
/// The coordinate is deliberately not part of the write -- callers address
/// the target tile separately, and the key never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TileWrite {
    /// New display name.
    pub name: String,
    /// New occupant kind.
    pub kind: TileKind,
    /// New owning race.
    pub race: String,
    /// New owning player id.
    pub player_id: String,
    /// New owning player display name.
    pub player_name: String,
    /// New metadata payload, if any.
    pub metadata: Option<TileMetadata>,
}

/// The projection served by the full-map listing: one row per tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TileSummary {
    /// Tile x position.
    pub x: i32,
    /// Tile y position.
    pub y: i32,
    /// Occupant kind.
    #[serde(rename = "type")]
    pub kind: TileKind,
    /// Owning race.
    pub race: String,
    /// Display name.
    pub name: String,
}

/// The projection served by the around-query: adds the owner display name
/// so the map can label player villages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    /// Tile x position.
    pub x: i32,
    /// Tile y position.
    pub y: i32,
    /// Display name.
    pub name: String,
    /// Occupant kind.
    #[serde(rename = "type")]
    pub kind: TileKind,
    /// Owning race.
    pub race: String,
    /// Owner display name.
    pub player_name: String,
}

// ---------------------------------------------------------------------------
// World record
// ---------------------------------------------------------------------------

/// The singleton world record.
///
/// At most one row exists; its presence is the guard that makes world
/// generation idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct World {
    /// Row identifier.
    pub id: Uuid,
    /// World display name.
    pub name: String,
    /// Edge length of the square grid.
    pub size: u32,
    /// When generation ran.
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Static faction catalog
// ---------------------------------------------------------------------------

/// A satellite outpost declared by the faction catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FactionOutpost {
    /// Where the outpost is stamped.
    pub coord: Coordinate,
    /// Outpost display name.
    pub name: String,
    /// Declared sub-type.
    pub kind: OutpostKind,
}

/// A playable faction, derived from world size at generation time.
///
/// Never persisted: the catalog is a pure function of world size and the
/// generator stamps its contents onto the grid. Hub and outpost coordinates
/// are pre-validated by the catalog to be in-bounds and collision-free --
/// the generator does not re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Faction {
    /// Faction name, stored in the tile `race` column.
    pub name: String,
    /// The capital tile coordinate.
    pub hub: Coordinate,
    /// Capital display name.
    pub hub_name: String,
    /// Faction flavor text, stamped into the hub metadata.
    pub description: String,
    /// Faction traits, stamped into the hub metadata.
    pub traits: Vec<String>,
    /// Satellite outposts, stamped after the hub.
    pub outposts: Vec<FactionOutpost>,
}
