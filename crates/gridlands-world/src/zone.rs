//! Difficulty zones derived from distance to the nearest faction hub.
//!
//! Classification is a pure, total function of distance; the per-zone NPC
//! metadata is a fixed lookup table of game-balance constants. Neither
//! computes anything -- tuning happens by editing the table, not the code.

use gridlands_types::{Difficulty, ExpansionReward, LootTable, NpcMetadata, Zone};

/// Upper distance bound of the core zone (inclusive).
pub const CORE_MAX_DISTANCE: f64 = 10.0;

/// Upper distance bound of the mid zone (inclusive).
pub const MID_MAX_DISTANCE: f64 = 25.0;

/// Classify a distance-to-nearest-hub into its difficulty zone.
pub const fn classify(distance: f64) -> Zone {
    if distance <= CORE_MAX_DISTANCE {
        Zone::Core
    } else if distance <= MID_MAX_DISTANCE {
        Zone::Mid
    } else {
        Zone::Outer
    }
}

/// The fixed NPC village metadata for a zone.
pub const fn npc_metadata(zone: Zone) -> NpcMetadata {
    match zone {
        Zone::Core => NpcMetadata {
            zone,
            difficulty: Difficulty::Easy,
            loot: LootTable { wood: 100, gold: 50 },
            expansion_reward: None,
            event_trigger: None,
        },
        Zone::Mid => NpcMetadata {
            zone,
            difficulty: Difficulty::Moderate,
            loot: LootTable { wood: 200, gold: 150 },
            expansion_reward: Some(ExpansionReward::MinorBuff),
            event_trigger: None,
        },
        Zone::Outer => NpcMetadata {
            zone,
            difficulty: Difficulty::Hard,
            loot: LootTable { wood: 400, gold: 300 },
            expansion_reward: Some(ExpansionReward::RareResource),
            event_trigger: Some(true),
        },
    }
}
