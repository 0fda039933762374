//! Spatial primitives for the Gridlands world engine.
//!
//! This crate holds the pure, synchronous half of the engine: coordinate
//! geometry, uniform-disk polar sampling, difficulty-zone classification,
//! the static faction catalog, and the process-local reservation set. None
//! of it touches the grid store or the message bus -- everything here is
//! deterministic given its inputs (the samplers take the RNG as a
//! parameter so generation can be seeded and replayed).
//!
//! # Modules
//!
//! - [`error`] -- Error types for catalog construction.
//! - [`factions`] -- The static faction catalog: hubs and satellite
//!   outposts derived from world size.
//! - [`geometry`] -- Euclidean distance, nearest-hub lookup, proximity
//!   checks.
//! - [`reserve`] -- The process-local set of coordinates already handed
//!   out by a search.
//! - [`sampling`] -- Uniform-areal-density sampling inside a disk.
//! - [`zone`] -- Distance-to-hub difficulty tiers and their fixed NPC
//!   metadata table.

pub mod error;
pub mod factions;
pub mod geometry;
pub mod reserve;
pub mod sampling;
pub mod zone;

// Re-export primary items at crate root.
pub use error::WorldError;
pub use factions::{MIN_WORLD_SIZE, static_factions};
pub use reserve::ReservationSet;
