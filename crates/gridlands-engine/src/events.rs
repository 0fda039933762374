//! NATS event plumbing for the World Engine.
//!
//! # Subject Convention
//!
//! - **Consume:** `world.village-tile.requested` -- the village service
//!   asks for a tile near a faction outpost.
//! - **Produce:** `player.allocated` -- the engine reports the claimed
//!   coordinate, echoing the request fields.
//!
//! Delivery is at-least-once and there is no request identifier on the
//! wire: results are correlated to requests by player identity only.
//!
//! Each inbound request is handled in its own spawned task, so handlers
//! for different requests run concurrently. They share the reservation
//! set, and the store's conditional claim arbitrates any race the set
//! does not catch. A failed allocation is logged and publishes nothing --
//! retrying is the requester's decision.

use std::sync::Arc;

use futures::StreamExt as _;
use gridlands_core::config::EngineConfig;
use gridlands_core::publish::{AllocationPublisher, PublishError};
use gridlands_core::allocation;
use gridlands_db::PgGrid;
use gridlands_types::{PlayerAllocated, TileRequest, half_extent, subjects};
use gridlands_world::ReservationSet;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, warn};

use crate::error::EngineError;

/// Publishes allocation results to NATS.
#[derive(Debug, Clone)]
pub struct NatsPublisher {
    client: async_nats::Client,
}

impl NatsPublisher {
    /// Wrap an already-connected NATS client.
    pub const fn new(client: async_nats::Client) -> Self {
        Self { client }
    }
}

impl AllocationPublisher for NatsPublisher {
    async fn publish_allocated(&self, event: &PlayerAllocated) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(event)
            .map_err(|e| PublishError(format!("failed to serialize result: {e}")))?;

        self.client
            .publish(subjects::PLAYER_ALLOCATED.to_owned(), payload.into())
            .await
            .map_err(|e| PublishError(format!("failed to publish result: {e}")))?;

        // Flush so the result is on the wire before the handler reports
        // success.
        self.client
            .flush()
            .await
            .map_err(|e| PublishError(format!("failed to flush NATS: {e}")))?;

        Ok(())
    }
}

/// Decode an inbound request payload, logging and dropping malformed ones.
fn parse_request(payload: &[u8]) -> Option<TileRequest> {
    match serde_json::from_slice::<TileRequest>(payload) {
        Ok(request) => Some(request),
        Err(e) => {
            warn!(error = %e, "Failed to deserialize allocation request, dropping");
            None
        }
    }
}

/// Subscribe to allocation requests and serve them until the connection
/// closes.
///
/// # Errors
///
/// Returns [`EngineError::Nats`] if the subscription cannot be created.
pub async fn run_request_listener(
    client: async_nats::Client,
    grid: Arc<PgGrid>,
    reserved: Arc<ReservationSet>,
    config: Arc<EngineConfig>,
) -> Result<(), EngineError> {
    let mut requests = client
        .subscribe(subjects::TILE_REQUESTED.to_owned())
        .await
        .map_err(|e| EngineError::Nats {
            message: format!("failed to subscribe to {}: {e}", subjects::TILE_REQUESTED),
        })?;

    info!(subject = subjects::TILE_REQUESTED, "Listening for allocation requests");
    let publisher = NatsPublisher::new(client);
    let half = half_extent(config.world.size);

    while let Some(message) = requests.next().await {
        let Some(request) = parse_request(&message.payload) else {
            continue;
        };

        let grid = Arc::clone(&grid);
        let reserved = Arc::clone(&reserved);
        let publisher = publisher.clone();
        let placement = config.placement.clone();

        tokio::spawn(async move {
            let mut rng = SmallRng::from_os_rng();
            match allocation::allocate(
                grid.as_ref(),
                &reserved,
                &publisher,
                &mut rng,
                &placement,
                half,
                &request,
            )
            .await
            {
                Ok(event) => {
                    info!(
                        player = event.player_name,
                        x = event.x,
                        y = event.y,
                        "Allocation result published"
                    );
                }
                Err(e) => {
                    warn!(
                        player = request.player_name,
                        race = request.race,
                        error = %e,
                        "Allocation failed"
                    );
                }
            }
        });
    }

    warn!("Allocation request subscription closed");
    Ok(())
}
