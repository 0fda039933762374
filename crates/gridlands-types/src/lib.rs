//! Shared type definitions for the Gridlands world engine.
//!
//! Every type that crosses a crate or service boundary lives here: grid
//! coordinates, tiles and their metadata payloads, the world record, the
//! static faction catalog types, and the event payloads exchanged with the
//! village service over the message bus.
//!
//! Wire-facing types derive [`ts_rs::TS`] so the TypeScript village/player
//! services and the map frontend consume generated bindings instead of
//! hand-maintained interfaces.

pub mod coord;
pub mod enums;
pub mod events;
pub mod structs;

// Re-export primary types at crate root.
pub use coord::{Coordinate, half_extent};
pub use enums::{Difficulty, ExpansionReward, OutpostKind, TileKind, Zone};
pub use events::{PlayerAllocated, TileRequest, subjects};
pub use structs::{
    Faction, FactionOutpost, LootTable, NpcMetadata, OutpostMetadata, Tile, TileMetadata,
    TileSummary, TileView, TileWrite, World, owners, races,
};
