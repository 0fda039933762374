//! Event payloads exchanged with the village service over the message bus.
//!
//! Payloads are JSON with `camelCase` fields -- the shapes the TypeScript
//! services already produce and consume. There is no request identifier on
//! the wire: a result is correlated to its request by player identity only,
//! a known limitation of the protocol.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Bus subjects the world engine consumes and produces.
pub mod subjects {
    /// Inbound: the village service asks for a tile near a faction outpost.
    pub const TILE_REQUESTED: &str = "world.village-tile.requested";
    /// Outbound: the world engine reports a claimed tile.
    pub const PLAYER_ALLOCATED: &str = "player.allocated";
}

/// An inbound request to place a new player village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct TileRequest {
    /// The faction whose territory the village should neighbor.
    pub race: String,
    /// Requesting player id.
    pub player_id: String,
    /// Requesting player display name.
    pub player_name: String,
    /// Desired village name.
    pub name: String,
}

/// An outbound allocation result: the tile that was claimed.
///
/// Echoes the request fields so the consumer can materialize the village
/// record without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct PlayerAllocated {
    /// Claimed tile x position.
    pub x: i32,
    /// Claimed tile y position.
    pub y: i32,
    /// Owning player id.
    pub player_id: String,
    /// The faction the village belongs to.
    pub race: String,
    /// Owning player display name.
    pub player_name: String,
    /// Village name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case() {
        let json = r#"{
            "race": "Valdune",
            "playerId": "p-17",
            "playerName": "Mira",
            "name": "Rivermouth"
        }"#;
        let request: Option<TileRequest> = serde_json::from_str(json).ok();
        assert_eq!(
            request,
            Some(TileRequest {
                race: String::from("Valdune"),
                player_id: String::from("p-17"),
                player_name: String::from("Mira"),
                name: String::from("Rivermouth"),
            })
        );
    }

    #[test]
    fn allocated_serializes_camel_case() {
        let event = PlayerAllocated {
            x: -4,
            y: 9,
            player_id: String::from("p-17"),
            race: String::from("Valdune"),
            player_name: String::from("Mira"),
            name: String::from("Rivermouth"),
        };
        let value = serde_json::to_value(&event).ok();
        assert_eq!(
            value,
            Some(serde_json::json!({
                "x": -4,
                "y": 9,
                "playerId": "p-17",
                "race": "Valdune",
                "playerName": "Mira",
                "name": "Rivermouth",
            }))
        );
    }
}
