//! One-shot world generation.
//!
//! Generation is a state machine with two states -- ungenerated and
//! generated -- and a single guarded transition. The guard is the singleton
//! world record: if one exists the call is a warned no-op and the tile set
//! is left untouched, which is what makes the boot-time invocation and the
//! manual API trigger safe to run at any time.
//!
//! The transition itself, in order: wipe any stale tiles, create the world
//! record, bulk-create the empty grid, stamp every faction's hub and
//! declared outposts, then scatter NPC villages into difficulty zones. Any
//! failure past the guard is fatal to the run and nothing is rolled back --
//! generation is bootstrap, not a steady-state operation, and a partial
//! world requires operator intervention (the world record already exists,
//! so a re-run will refuse to touch it).

use chrono::{DateTime, Utc};
use gridlands_db::GridStore;
use gridlands_types::{
    Coordinate, Faction, OutpostKind, OutpostMetadata, Tile, TileKind, TileMetadata, TileWrite,
    half_extent, owners, races,
};
use gridlands_world::reserve::ReservationSet;
use gridlands_world::{geometry, zone};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::{PlacementConfig, WorldConfig};
use crate::error::GeneratorError;
use crate::search::{TileSearch, scatter_predicate};

/// What a completed generation produced.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Empty tiles created in the bulk pass.
    pub tiles_created: u64,
    /// Factions stamped (hub plus outposts each).
    pub factions_placed: usize,
    /// NPC villages scattered.
    pub npc_villages: u32,
}

/// Result of a generation call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum GenerationOutcome {
    /// The world was generated by this call.
    Generated(GenerationReport),
    /// A world already existed; nothing was touched.
    #[serde(rename_all = "camelCase")]
    Skipped {
        /// When the existing world was generated.
        created_at: DateTime<Utc>,
    },
}

/// RNG for generation: seeded for reproducible worlds, entropy otherwise.
///
/// The same seed and catalog produce the same world, which is how staging
/// environments and bug reports replay a layout.
pub fn scatter_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64)
}

/// Generate the world, if it does not already exist.
///
/// Idempotent at the call level: the first invocation performs the full
/// build, every later one returns [`GenerationOutcome::Skipped`]. The
/// faction catalog is taken as a parameter -- production passes
/// [`gridlands_world::static_factions`], tests pass purpose-built ones --
/// and its coordinates are trusted to be in-bounds and collision-free.
///
/// # Errors
///
/// Any store or placement failure aborts generation; see
/// [`GeneratorError`] for the cases. No rollback is attempted.
pub async fn generate_world<S, R>(
    grid: &S,
    reserved: &ReservationSet,
    rng: &mut R,
    world: &WorldConfig,
    placement: &PlacementConfig,
    catalog: &[Faction],
) -> Result<GenerationOutcome, GeneratorError>
where
    S: GridStore,
    R: Rng,
{
    if let Some(existing) = grid.world().await? {
        warn!(created_at = %existing.created_at, "World already exists. Skipping generation.");
        return Ok(GenerationOutcome::Skipped {
            created_at: existing.created_at,
        });
    }

    // Stale tiles can only exist here if a prior run failed between the
    // tile wipe and the world-record insert; clear them before rebuilding.
    let removed = grid.delete_all_tiles().await?;
    if removed > 0 {
        warn!(removed, "Stale tiles deleted before generation");
    }

    grid.create_world(&world.name, world.size).await?;
    info!(name = world.name, size = world.size, "Starting world generation");

    let half = half_extent(world.size);
    let tiles_created = create_empty_tiles(grid, half).await?;
    info!(count = tiles_created, "Created base tiles");

    let hubs = place_faction_structures(grid, catalog).await?;
    info!(factions = catalog.len(), "Faction structures placed");

    scatter_npc_villages(grid, reserved, rng, world, placement, half, &hubs).await?;
    info!(count = world.npc_village_count, "Non-player villages created");

    info!("World generation complete");
    Ok(GenerationOutcome::Generated(GenerationReport {
        tiles_created,
        factions_placed: catalog.len(),
        npc_villages: world.npc_village_count,
    }))
}

/// Bulk-create one empty tile for every coordinate in `[-half, half)^2`.
async fn create_empty_tiles<S: GridStore>(grid: &S, half: i32) -> Result<u64, GeneratorError> {
    let mut tiles = Vec::new();
    for x in half.saturating_neg()..half {
        for y in half.saturating_neg()..half {
            tiles.push(Tile::empty(Coordinate::new(x, y)));
        }
    }
    Ok(grid.create_tiles(&tiles).await?)
}

/// Stamp every faction's hub and declared outposts. Returns the hub
/// coordinates for the scatter pass.
async fn place_faction_structures<S: GridStore>(
    grid: &S,
    catalog: &[Faction],
) -> Result<Vec<Coordinate>, GeneratorError> {
    let mut hubs = Vec::with_capacity(catalog.len());

    for faction in catalog {
        hubs.push(faction.hub);

        grid.update_tile(
            faction.hub,
            &TileWrite {
                name: faction.hub_name.clone(),
                kind: TileKind::Outpost,
                race: faction.name.clone(),
                player_id: owners::SYSTEM.to_owned(),
                player_name: owners::SYSTEM.to_owned(),
                metadata: Some(TileMetadata::Outpost(OutpostMetadata {
                    outpost_type: OutpostKind::Hub,
                    description: Some(faction.description.clone()),
                    traits: Some(faction.traits.clone()),
                })),
            },
        )
        .await?;

        for outpost in &faction.outposts {
            grid.update_tile(
                outpost.coord,
                &TileWrite {
                    name: outpost.name.clone(),
                    kind: TileKind::Outpost,
                    race: faction.name.clone(),
                    player_id: owners::SYSTEM.to_owned(),
                    player_name: owners::SYSTEM.to_owned(),
                    metadata: Some(TileMetadata::Outpost(OutpostMetadata {
                        outpost_type: outpost.kind,
                        description: None,
                        traits: None,
                    })),
                },
            )
            .await?;
        }
    }

    Ok(hubs)
}

/// Scatter NPC villages into zones derived from distance-to-nearest-hub.
async fn scatter_npc_villages<S, R>(
    grid: &S,
    reserved: &ReservationSet,
    rng: &mut R,
    world: &WorldConfig,
    placement: &PlacementConfig,
    half: i32,
    hubs: &[Coordinate],
) -> Result<(), GeneratorError>
where
    S: GridStore,
    R: Rng,
{
    if hubs.is_empty() {
        return Err(GeneratorError::EmptyCatalog);
    }

    let search = TileSearch::new(grid, reserved, half);
    let scatter_radius = placement.scatter_radius.unwrap_or(f64::from(half));

    for i in 1..=world.npc_village_count {
        let coord = search
            .find_valid(
                rng,
                placement.max_attempts,
                scatter_radius,
                scatter_predicate(hubs, placement.hub_clearance),
            )
            .await?;

        let nearest = geometry::nearest_hub(coord, hubs).ok_or(GeneratorError::EmptyCatalog)?;
        let distance = geometry::distance(coord, nearest);
        let metadata = zone::npc_metadata(zone::classify(distance));

        let claimed = grid
            .claim_if_empty(
                coord,
                &TileWrite {
                    name: format!("Bandit Camp {i}"),
                    kind: TileKind::Village,
                    race: races::NEUTRAL.to_owned(),
                    player_id: owners::SYSTEM.to_owned(),
                    player_name: owners::SYSTEM.to_owned(),
                    metadata: Some(TileMetadata::Npc(metadata)),
                },
            )
            .await?;
        if !claimed {
            return Err(GeneratorError::ClaimConflict(coord));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::arithmetic_side_effects)]
mod tests {
    use std::collections::BTreeSet;

    use gridlands_db::MemoryGrid;
    use gridlands_types::{Difficulty, FactionOutpost, OutpostKind, Zone};
    use gridlands_world::static_factions;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    /// A size-40 world keeps the scatter pass comfortable while the
    /// default placement budgets stay realistic.
    fn test_world() -> WorldConfig {
        WorldConfig {
            name: String::from("Testworld"),
            size: 40,
            seed: Some(7),
            npc_village_count: 20,
        }
    }

    /// Generous budgets so seeded scatter cannot plausibly exhaust them.
    fn test_placement() -> PlacementConfig {
        PlacementConfig {
            max_attempts: 500,
            ..PlacementConfig::default()
        }
    }

    async fn generate(
        grid: &MemoryGrid,
        world: &WorldConfig,
        placement: &PlacementConfig,
        catalog: &[Faction],
    ) -> GenerationOutcome {
        let reserved = ReservationSet::new();
        let mut rng = SmallRng::seed_from_u64(world.seed.unwrap_or(0));
        generate_world(grid, &reserved, &mut rng, world, placement, catalog)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn every_coordinate_has_exactly_one_tile() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let catalog = static_factions(world.size).unwrap();
        let outcome = generate(&grid, &world, &test_placement(), &catalog).await;

        assert!(matches!(outcome, GenerationOutcome::Generated(_)));

        let half = half_extent(world.size);
        let tiles = grid.list_tiles().await.unwrap();
        assert_eq!(tiles.len(), 1600);

        let coords: BTreeSet<(i32, i32)> = tiles.iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(coords.len(), tiles.len(), "duplicate coordinates");
        for tile in &tiles {
            assert!(tile.x >= -half && tile.x < half, "x out of range: {}", tile.x);
            assert!(tile.y >= -half && tile.y < half, "y out of range: {}", tile.y);
        }
    }

    #[tokio::test]
    async fn second_generation_is_a_no_op() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let catalog = static_factions(world.size).unwrap();

        let first = generate(&grid, &world, &test_placement(), &catalog).await;
        let GenerationOutcome::Generated(report) = first else {
            panic!("first generation should build the world");
        };
        assert_eq!(report.tiles_created, 1600);

        let before = grid.list_tiles().await.unwrap();
        let second = generate(&grid, &world, &test_placement(), &catalog).await;
        assert!(matches!(second, GenerationOutcome::Skipped { .. }));

        let after = grid.list_tiles().await.unwrap();
        assert_eq!(before, after, "second call must leave the tile set unchanged");
    }

    #[tokio::test]
    async fn hubs_and_outposts_are_stamped_with_metadata() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let catalog = static_factions(world.size).unwrap();
        generate(&grid, &world, &test_placement(), &catalog).await;

        for faction in &catalog {
            let hub = grid.tile_at(faction.hub).await.unwrap().unwrap();
            assert_eq!(hub.kind, TileKind::Outpost);
            assert_eq!(hub.race, faction.name);
            assert_eq!(hub.name, faction.hub_name);
            match &hub.metadata {
                Some(TileMetadata::Outpost(meta)) => {
                    assert_eq!(meta.outpost_type, OutpostKind::Hub);
                    assert_eq!(meta.description.as_deref(), Some(faction.description.as_str()));
                    assert_eq!(meta.traits.as_deref(), Some(faction.traits.as_slice()));
                }
                other => panic!("hub metadata wrong for {}: {other:?}", faction.name),
            }

            for outpost in &faction.outposts {
                let tile = grid.tile_at(outpost.coord).await.unwrap().unwrap();
                assert_eq!(tile.kind, TileKind::Outpost);
                assert_eq!(tile.race, faction.name);
                match &tile.metadata {
                    Some(TileMetadata::Outpost(meta)) => {
                        assert_eq!(meta.outpost_type, outpost.kind);
                        assert_eq!(meta.description, None);
                    }
                    other => panic!("outpost metadata wrong: {other:?}"),
                }
            }
        }
    }

    #[tokio::test]
    async fn npc_villages_respect_hub_clearance_and_zones() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let placement = test_placement();
        let catalog = static_factions(world.size).unwrap();
        generate(&grid, &world, &placement, &catalog).await;

        let hubs: Vec<Coordinate> = catalog.iter().map(|f| f.hub).collect();
        let villages: Vec<Tile> = {
            let mut out = Vec::new();
            for summary in grid.list_tiles().await.unwrap() {
                if summary.kind == TileKind::Village {
                    let tile = grid
                        .tile_at(Coordinate::new(summary.x, summary.y))
                        .await
                        .unwrap()
                        .unwrap();
                    out.push(tile);
                }
            }
            out
        };
        assert_eq!(villages.len(), 20);

        for village in &villages {
            assert_eq!(village.race, races::NEUTRAL);
            for &hub in &hubs {
                assert!(
                    geometry::distance(village.coord, hub) >= placement.hub_clearance,
                    "village {} too close to hub {hub}",
                    village.coord
                );
            }

            // Stored difficulty must agree with a fresh classification.
            let nearest = geometry::nearest_hub(village.coord, &hubs).unwrap();
            let expected = match zone::classify(geometry::distance(village.coord, nearest)) {
                Zone::Core => Difficulty::Easy,
                Zone::Mid => Difficulty::Moderate,
                Zone::Outer => Difficulty::Hard,
            };
            match &village.metadata {
                Some(TileMetadata::Npc(meta)) => assert_eq!(meta.difficulty, expected),
                other => panic!("village metadata wrong: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn generation_claims_no_coordinate_twice() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let catalog = static_factions(world.size).unwrap();
        generate(&grid, &world, &test_placement(), &catalog).await;

        let claimed: Vec<(i32, i32)> = grid
            .list_tiles()
            .await
            .unwrap()
            .into_iter()
            .filter(|t| t.kind != TileKind::Empty)
            .map(|t| (t.x, t.y))
            .collect();
        let unique: BTreeSet<(i32, i32)> = claimed.iter().copied().collect();
        assert_eq!(unique.len(), claimed.len());
        // 4 hubs + 8 outposts + 20 villages.
        assert_eq!(claimed.len(), 32);
    }

    #[tokio::test]
    async fn bandit_camps_are_numbered_from_one() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let catalog = static_factions(world.size).unwrap();
        generate(&grid, &world, &test_placement(), &catalog).await;

        let names: BTreeSet<String> = grid
            .list_tiles()
            .await
            .unwrap()
            .into_iter()
            .filter(|t| t.kind == TileKind::Village)
            .map(|t| t.name)
            .collect();
        for i in 1..=20 {
            assert!(names.contains(&format!("Bandit Camp {i}")), "missing camp {i}");
        }
    }

    /// The acceptance scenario: a size-10 world with a single hub at the
    /// origin and no satellites. Only the outer rim of the 10x10 grid is
    /// five or more units from the hub, so the scatter needs a widened
    /// sampling disk (to reach the corners) and a deep attempt budget.
    #[tokio::test]
    async fn minimal_world_scenario() {
        let grid = MemoryGrid::new();
        let world = WorldConfig {
            name: String::from("Minimal"),
            size: 10,
            seed: Some(11),
            npc_village_count: 20,
        };
        let placement = PlacementConfig {
            max_attempts: 5000,
            scatter_radius: Some(8.0),
            ..PlacementConfig::default()
        };
        let catalog = vec![Faction {
            name: String::from("Solus"),
            hub: Coordinate::new(0, 0),
            hub_name: String::from("Lone Spire"),
            description: String::from("The only banner in a small world."),
            traits: vec![String::from("solitary")],
            outposts: Vec::<FactionOutpost>::new(),
        }];

        let outcome = generate(&grid, &world, &placement, &catalog).await;
        assert!(matches!(outcome, GenerationOutcome::Generated(_)));

        let tiles = grid.list_tiles().await.unwrap();
        assert_eq!(tiles.len(), 100);

        let hub = grid.tile_at(Coordinate::new(0, 0)).await.unwrap().unwrap();
        assert_eq!(hub.kind, TileKind::Outpost);

        let villages: Vec<&gridlands_types::TileSummary> =
            tiles.iter().filter(|t| t.kind == TileKind::Village).collect();
        assert_eq!(villages.len(), 20);
        for village in villages {
            let coord = Coordinate::new(village.x, village.y);
            assert!(
                geometry::distance(coord, Coordinate::new(0, 0)) >= 5.0,
                "village {coord} inside hub clearance"
            );
        }
    }

    #[tokio::test]
    async fn empty_catalog_is_rejected() {
        let grid = MemoryGrid::new();
        let world = test_world();
        let reserved = ReservationSet::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let result = generate_world(
            &grid,
            &reserved,
            &mut rng,
            &world,
            &test_placement(),
            &[],
        )
        .await;
        assert!(matches!(result, Err(GeneratorError::EmptyCatalog)));
    }

    #[tokio::test]
    async fn exhausted_scatter_aborts_generation() {
        // A world too small for its clearance: no tile is 50 units from
        // the hub, so scatter must exhaust its budget and abort.
        let grid = MemoryGrid::new();
        let world = WorldConfig {
            name: String::from("Cramped"),
            size: 10,
            seed: Some(3),
            npc_village_count: 1,
        };
        let placement = PlacementConfig {
            hub_clearance: 50.0,
            max_attempts: 40,
            ..PlacementConfig::default()
        };
        let catalog = vec![Faction {
            name: String::from("Solus"),
            hub: Coordinate::new(0, 0),
            hub_name: String::from("Lone Spire"),
            description: String::new(),
            traits: Vec::new(),
            outposts: Vec::new(),
        }];

        let reserved = ReservationSet::new();
        let mut rng = SmallRng::seed_from_u64(3);
        let result =
            generate_world(&grid, &reserved, &mut rng, &world, &placement, &catalog).await;
        assert!(matches!(
            result,
            Err(GeneratorError::Placement(
                crate::error::PlacementError::NoValidTile { .. }
            ))
        ));

        // The guard record was created before the failure: a re-run is a
        // warned no-op, matching the documented operator semantics.
        assert!(grid.world().await.unwrap().is_some());
    }
}
