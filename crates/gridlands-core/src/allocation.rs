//! Player village allocation.
//!
//! One inbound `world.village-tile.requested` event maps to one
//! [`allocate`] call: validate the request, anchor on a random outpost of
//! the requested race, search the surrounding block for an empty tile,
//! claim it conditionally, and publish the `player.allocated` result.
//!
//! A failed allocation mutates nothing visible and publishes nothing; the
//! caller reports the typed error upstream. There is no idempotency key on
//! the wire, so a duplicate request claims a second, distinct tile --
//! duplicate suppression is the consuming service's concern.

use gridlands_db::GridStore;
use gridlands_types::{PlayerAllocated, TileKind, TileRequest, TileWrite};
use gridlands_world::reserve::ReservationSet;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::info;

use crate::config::PlacementConfig;
use crate::error::AllocationError;
use crate::publish::AllocationPublisher;
use crate::search::TileSearch;

/// Reject a blank required field before any store access.
fn require(field: &'static str, value: &str) -> Result<(), AllocationError> {
    if value.trim().is_empty() {
        return Err(AllocationError::InvalidRequest { field });
    }
    Ok(())
}

/// Place a player village near an outpost of the requested race.
///
/// On success the claimed tile carries the player's ownership and the
/// returned [`PlayerAllocated`] event has been published. On failure no
/// tile was claimed and nothing was published.
///
/// # Errors
///
/// See [`AllocationError`]; validation failures are detected before any
/// store access.
pub async fn allocate<S, P, R>(
    grid: &S,
    reserved: &ReservationSet,
    publisher: &P,
    rng: &mut R,
    placement: &PlacementConfig,
    half_extent: i32,
    request: &TileRequest,
) -> Result<PlayerAllocated, AllocationError>
where
    S: GridStore,
    P: AllocationPublisher,
    R: Rng,
{
    require("name", &request.name)?;
    require("playerId", &request.player_id)?;
    require("playerName", &request.player_name)?;

    let outposts = grid.outposts_for_race(&request.race).await?;
    let anchor = outposts
        .choose(rng)
        .ok_or_else(|| AllocationError::NoOutpostsForRace(request.race.clone()))?;

    let search = TileSearch::new(grid, reserved, half_extent);
    let coord = search
        .find_empty_near(anchor.coord, placement.ring_radius)
        .await?;

    let claimed = grid
        .claim_if_empty(
            coord,
            &TileWrite {
                name: request.name.clone(),
                kind: TileKind::Village,
                race: request.race.clone(),
                player_id: request.player_id.clone(),
                player_name: request.player_name.clone(),
                metadata: None,
            },
        )
        .await?;
    if !claimed {
        return Err(AllocationError::StoreConflict(coord));
    }

    let event = PlayerAllocated {
        x: coord.x,
        y: coord.y,
        player_id: request.player_id.clone(),
        race: request.race.clone(),
        player_name: request.player_name.clone(),
        name: request.name.clone(),
    };
    publisher.publish_allocated(&event).await?;

    info!(
        village = request.name,
        player = request.player_name,
        %coord,
        "Village created"
    );
    Ok(event)
}
