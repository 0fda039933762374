//! Orchestration for the Gridlands world engine.
//!
//! This crate ties the pure spatial logic of `gridlands-world` to the
//! persistent grid of `gridlands-db`: the bounded-retry tile searches, the
//! one-shot idempotent world generator, and the allocation service that
//! answers village placement requests. Everything is generic over
//! [`GridStore`](gridlands_db::GridStore) and the [`AllocationPublisher`]
//! seam, so unit tests drive the full flows against the in-memory grid and
//! a recording publisher.
//!
//! # Modules
//!
//! - [`allocation`] -- Player village placement: validate, anchor on a
//!   faction outpost, claim nearby, publish the result.
//! - [`config`] -- Engine configuration (YAML file + env overrides).
//! - [`error`] -- Placement, generation, and allocation error types.
//! - [`generator`] -- The one-shot world generation state machine.
//! - [`publish`] -- The outbound event seam.
//! - [`search`] -- Rejection sampling and expanding-block searches over
//!   the grid.

pub mod allocation;
pub mod config;
pub mod error;
pub mod generator;
pub mod publish;
pub mod search;

// Re-export primary items at crate root.
pub use allocation::allocate;
pub use config::{ConfigError, EngineConfig, PlacementConfig, WorldConfig};
pub use error::{AllocationError, GeneratorError, PlacementError};
pub use generator::{GenerationOutcome, GenerationReport, generate_world, scatter_rng};
pub use publish::{AllocationPublisher, PublishError};
pub use search::{TileSearch, scatter_predicate};
