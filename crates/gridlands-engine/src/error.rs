//! Error types for the World Engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and request handling.

/// Top-level error for the World Engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: gridlands_core::ConfigError,
    },

    /// A grid store operation failed.
    #[error("grid store error: {source}")]
    Db {
        /// The underlying store error.
        #[from]
        source: gridlands_db::DbError,
    },

    /// The faction catalog rejected the configured world size.
    #[error("catalog error: {source}")]
    Catalog {
        /// The underlying catalog error.
        #[from]
        source: gridlands_world::WorldError,
    },

    /// World generation failed at boot.
    #[error("generation error: {source}")]
    Generator {
        /// The underlying generator error.
        #[from]
        source: gridlands_core::GeneratorError,
    },

    /// NATS connection or messaging failed.
    #[error("NATS error: {message}")]
    Nats {
        /// Description of the NATS failure.
        message: String,
    },

    /// The query API server failed to start.
    #[error("API error: {message}")]
    Api {
        /// Description of the API failure.
        message: String,
    },
}
