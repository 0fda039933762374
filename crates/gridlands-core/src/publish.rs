//! The outbound event seam.
//!
//! The allocation service reports successful claims as `player.allocated`
//! events. It does so through [`AllocationPublisher`] rather than a
//! concrete bus client, so the engine binary plugs in NATS while unit
//! tests plug in a recorder. (The same seam pattern the engine uses for
//! its inbound side.)

use std::future::Future;

use gridlands_types::PlayerAllocated;

/// A failed publish attempt, with the transport's own description.
#[derive(Debug, thiserror::Error)]
#[error("publish failed: {0}")]
pub struct PublishError(pub String);

/// Sink for allocation result events.
pub trait AllocationPublisher: Send + Sync {
    /// Publish one allocation result. At-least-once: the transport may
    /// redeliver, and consumers correlate by player identity.
    fn publish_allocated(
        &self,
        event: &PlayerAllocated,
    ) -> impl Future<Output = Result<(), PublishError>> + Send;
}
