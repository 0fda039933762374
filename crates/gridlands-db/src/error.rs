//! Error types for the grid store.
//!
//! All errors are propagated via [`DbError`], which wraps the underlying
//! [`sqlx`] errors with additional context about what failed.

use gridlands_types::Coordinate;

/// Errors that can occur in the grid store.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A `PostgreSQL` operation failed.
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A `PostgreSQL` migration failed.
    #[error("PostgreSQL migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A metadata payload could not be (de)serialized.
    #[error("metadata serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored column value could not be decoded into its domain type.
    #[error("unrecognized stored value: {0}")]
    Decode(String),

    /// An update addressed a coordinate with no tile row.
    #[error("no tile at {0}")]
    MissingTile(Coordinate),

    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
