//! Error types for search, generation, and allocation.
//!
//! Nothing here is retried automatically: search exhaustion and store
//! conflicts are terminal for the operation that hit them, and the caller
//! (or operator) decides whether to try again.

use gridlands_db::DbError;
use gridlands_types::Coordinate;

use crate::publish::PublishError;

/// Errors from the bounded tile searches.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// Rejection sampling exhausted its attempt budget.
    #[error("no valid tile found after {attempts} attempts")]
    NoValidTile {
        /// The attempt budget that was exhausted.
        attempts: u32,
    },

    /// The expanding search found no empty tile up to its radius cap.
    #[error("no empty tile within {max_radius} of {origin}")]
    NoNearbyTile {
        /// Center of the search.
        origin: Coordinate,
        /// The radius cap that was exhausted.
        max_radius: i32,
    },

    /// A grid store read failed mid-search.
    #[error("grid store error during search: {0}")]
    Db(#[from] DbError),
}

/// Errors that abort world generation.
///
/// Generation is a one-time bootstrap: any of these is fatal to the run
/// and leaves whatever was already persisted in place.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A grid store operation failed.
    #[error("grid store error: {0}")]
    Db(#[from] DbError),

    /// NPC scatter could not place a village.
    #[error("village scatter failed: {0}")]
    Placement(#[from] PlacementError),

    /// A scatter claim lost a race it should never lose during bootstrap.
    #[error("tile {0} was claimed concurrently during generation")]
    ClaimConflict(Coordinate),

    /// The faction catalog has no hubs to anchor zone classification on.
    #[error("faction catalog is empty")]
    EmptyCatalog,
}

/// Errors that fail an allocation request.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// A required request field is missing or blank. Rejected before any
    /// store access.
    #[error("missing required field '{field}' in allocation request")]
    InvalidRequest {
        /// The offending field, in wire naming.
        field: &'static str,
    },

    /// The race has no stamped outposts -- a catalog/data inconsistency,
    /// not a user error.
    #[error("no outposts found for race '{0}'")]
    NoOutpostsForRace(String),

    /// No empty tile near the chosen outpost.
    #[error("no space near outpost: {0}")]
    NoSpace(#[from] PlacementError),

    /// The chosen tile was claimed by a concurrent writer.
    #[error("tile {0} was claimed concurrently")]
    StoreConflict(Coordinate),

    /// A grid store operation failed.
    #[error("grid store error: {0}")]
    Db(#[from] DbError),

    /// The allocation result event could not be published.
    #[error("failed to publish allocation result: {0}")]
    Publish(#[from] PublishError),
}
