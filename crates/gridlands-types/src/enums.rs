//! Enumeration types for the Gridlands world engine.
//!
//! All enums serialize to SCREAMING_SNAKE_CASE strings, matching the values
//! the TypeScript village/player services already store and compare.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Tile kinds
// ---------------------------------------------------------------------------

/// What currently occupies a tile.
///
/// Every tile starts `Empty` at generation time. A tile becomes `Outpost`
/// when the generator stamps faction structures, or `Village` when either
/// the generator scatters an NPC camp or a player claims it through the
/// allocation flow. Tiles never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileKind {
    /// Unclaimed ground, owned by the system.
    Empty,
    /// A settlement -- NPC (neutral race) or player-owned.
    Village,
    /// A system-owned faction structure (hub or satellite).
    Outpost,
}

// ---------------------------------------------------------------------------
// Difficulty zones
// ---------------------------------------------------------------------------

/// Difficulty tier derived from a tile's distance to the nearest faction hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    /// Within 10 distance units of a hub -- starter territory.
    Core,
    /// Within 25 distance units -- contested middle band.
    Mid,
    /// Beyond 25 distance units -- the dangerous frontier.
    Outer,
}

/// Combat difficulty of an NPC village, fixed per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// Core-zone camps, beatable by fresh villages.
    Easy,
    /// Mid-zone camps.
    Moderate,
    /// Outer-zone camps.
    Hard,
}

/// Bonus granted for clearing an NPC village outside the core zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpansionReward {
    /// A temporary production buff (mid zone).
    MinorBuff,
    /// A rare resource drop (outer zone).
    RareResource,
}

// ---------------------------------------------------------------------------
// Outpost sub-types
// ---------------------------------------------------------------------------

/// The role of a faction-owned outpost tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutpostKind {
    /// The faction capital, anchor of all proximity calculations.
    Hub,
    /// A defensive satellite extending the faction's reach.
    Watchtower,
    /// A commercial satellite where player villages cluster.
    TradingPost,
    /// A ceremonial satellite.
    Shrine,
}
