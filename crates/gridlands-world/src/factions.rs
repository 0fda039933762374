//! The static faction catalog.
//!
//! Four factions, one per quadrant, derived from world size: hubs sit at
//! `(±H/2, ±H/2)` and each faction declares two satellite outposts offset
//! from its hub. The catalog is the single authority for these coordinates
//! -- the generator stamps them without re-checking, so the invariants
//! (in-bounds, collision-free) are enforced here and covered by tests.

use gridlands_types::{Coordinate, Faction, FactionOutpost, OutpostKind, half_extent};

use crate::error::WorldError;

/// Smallest world the catalog fits into.
///
/// Below this, outpost offsets from the quadrant hubs would leave the grid.
pub const MIN_WORLD_SIZE: u32 = 10;

/// How far satellite outposts sit from their hub, along one axis.
const OUTPOST_OFFSET: i32 = 2;

/// Helper to build a [`FactionOutpost`].
fn outpost(coord: Coordinate, name: &str, kind: OutpostKind) -> FactionOutpost {
    FactionOutpost {
        coord,
        name: name.to_owned(),
        kind,
    }
}

/// Build the static faction catalog for a world of the given size.
///
/// Pure: same size, same catalog. Hub coordinates scale with the world so
/// factions keep their quadrants at any supported size.
///
/// # Errors
///
/// Returns [`WorldError::WorldTooSmall`] below [`MIN_WORLD_SIZE`].
pub fn static_factions(world_size: u32) -> Result<Vec<Faction>, WorldError> {
    if world_size < MIN_WORLD_SIZE {
        return Err(WorldError::WorldTooSmall {
            size: world_size,
            min: MIN_WORLD_SIZE,
        });
    }

    let half = half_extent(world_size);
    let q = half / 2;
    let out = q.saturating_add(OUTPOST_OFFSET);

    Ok(vec![
        // -----------------------------------------------------------
        // Northeast: Valdune, desert traders
        // -----------------------------------------------------------
        Faction {
            name: String::from("Valdune"),
            hub: Coordinate::new(q, q),
            hub_name: String::from("Sunspire Citadel"),
            description: String::from(
                "Caravan lords of the eastern dunes, rich in gold and grudges.",
            ),
            traits: vec![String::from("mercantile"), String::from("sun-hardened")],
            outposts: vec![
                outpost(Coordinate::new(out, q), "Sunwatch Spire", OutpostKind::Watchtower),
                outpost(Coordinate::new(q, out), "Dune Market", OutpostKind::TradingPost),
            ],
        },
        // -----------------------------------------------------------
        // Northwest: Korrath, mountain clans
        // -----------------------------------------------------------
        Faction {
            name: String::from("Korrath"),
            hub: Coordinate::new(-q, q),
            hub_name: String::from("Ironhold"),
            description: String::from(
                "Clan-keeps carved into the high passes, where iron is law.",
            ),
            traits: vec![String::from("stalwart"), String::from("forgeborn")],
            outposts: vec![
                outpost(Coordinate::new(-out, q), "Stonewall Watch", OutpostKind::Watchtower),
                outpost(Coordinate::new(-q, out), "Forge Shrine", OutpostKind::Shrine),
            ],
        },
        // -----------------------------------------------------------
        // Southwest: Sylvar, forest courts
        // -----------------------------------------------------------
        Faction {
            name: String::from("Sylvar"),
            hub: Coordinate::new(-q, -q),
            hub_name: String::from("Thornweald Court"),
            description: String::from(
                "A court of wardens beneath the old canopy, slow to anger.",
            ),
            traits: vec![String::from("fleet-footed"), String::from("verdant")],
            outposts: vec![
                outpost(Coordinate::new(-out, -q), "Rootway Exchange", OutpostKind::TradingPost),
                outpost(Coordinate::new(-q, -out), "Moonwell Shrine", OutpostKind::Shrine),
            ],
        },
        // -----------------------------------------------------------
        // Southeast: Ashkari, plains zealots
        // -----------------------------------------------------------
        Faction {
            name: String::from("Ashkari"),
            hub: Coordinate::new(q, -q),
            hub_name: String::from("Emberreach"),
            description: String::from(
                "Riders of the ash plains, sworn to the embers of the old war.",
            ),
            traits: vec![String::from("fervent"), String::from("ash-sworn")],
            outposts: vec![
                outpost(Coordinate::new(out, -q), "Ashen Vigil", OutpostKind::Watchtower),
                outpost(Coordinate::new(q, -out), "Cinderpost", OutpostKind::TradingPost),
            ],
        },
    ])
}
