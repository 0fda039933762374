//! Error types for the `gridlands-world` crate.

/// Errors that can occur while building spatial data.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The requested world is too small to hold the faction catalog.
    ///
    /// Hub and outpost coordinates are derived from the half extent; below
    /// the minimum size they would land outside the grid.
    #[error("world size {size} is below the minimum of {min}")]
    WorldTooSmall {
        /// The requested world size.
        size: u32,
        /// The smallest supported size.
        min: u32,
    },
}
