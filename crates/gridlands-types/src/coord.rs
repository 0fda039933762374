//! Integer grid coordinates.
//!
//! The world is a square grid of tiles keyed by a signed coordinate pair.
//! For a world of size `S`, tiles occupy `[-H, H) x [-H, H)` where
//! `H = S / 2` (the half extent). Query validation accepts `|x| == H` --
//! the boundary check is closed at `H` -- even though no tile row exists
//! on that edge; lookups there simply find nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A tile position on the world grid.
///
/// Coordinates are the primary key of the tile table: no two tiles share
/// one. `Ord` orders by `x` then `y`, which keeps scans deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinate {
    /// Horizontal position, west negative.
    pub x: i32,
    /// Vertical position, south negative.
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate passes the world boundary check for the
    /// given half extent: `|x| <= half && |y| <= half`.
    ///
    /// Note the closed upper bound: `half` itself is accepted although
    /// tiles only exist up to `half - 1`. Searches rely on the subsequent
    /// tile lookup returning nothing there.
    pub const fn within_extent(self, half: i32) -> bool {
        self.x.abs() <= half && self.y.abs() <= half
    }

    /// Return this coordinate shifted by `(dx, dy)`, saturating at the
    /// integer limits.
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Half extent `H` for a world of the given size: `floor(size / 2)`.
///
/// Tiles occupy `[-H, H)` on both axes, `(2H)^2` tiles in total.
pub fn half_extent(world_size: u32) -> i32 {
    i32::try_from(world_size / 2).unwrap_or(i32::MAX)
}
