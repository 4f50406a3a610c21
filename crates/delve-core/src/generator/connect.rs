//! Region connection
//!
//! Collects every wall cell that touches two or more regions, then opens
//! random ones as doors until all regions are merged into one. Connectors
//! that end up joining an already merged area are dropped, occasionally
//! leaving an extra door behind to create loops. Connectors crowding a new
//! door are set aside and only used once no spaced-out connector is left.

use tracing::debug;

use super::Generator;
use crate::error::GenError;
use crate::geometry::{Dir, Point};
use crate::params::GenParams;
use crate::tile::{NULL_REGION, Region, Tile};
use crate::union_find::RegionSets;

/// Connectors this close (Chebyshev distance) to a new door are set aside
const DOOR_SPACING: i32 = 1;

/// A wall cell bordering several regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Connector {
    pos: Point,
    /// Distinct, sorted
    regions: Vec<Region>,
}

impl Connector {
    /// Still touches at least two distinct merged sets
    fn joins_apart(&self, sets: &mut RegionSets) -> bool {
        let first = sets.find(self.regions[0]);
        self.regions[1..].iter().any(|&r| sets.find(r) != first)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Connections {
    pub doors: usize,
    pub redundant_doors: usize,
}

impl Generator<'_> {
    pub(super) fn find_connectors(&self) -> Vec<Connector> {
        let tiles = &self.world.tiles;
        let regions = &self.world.regions;

        tiles
            .interior()
            .filter(|&p| tiles[p] == Tile::Wall)
            .filter_map(|pos| {
                let mut adjacent: Vec<Region> = Dir::ALL
                    .iter()
                    .map(|dir| regions[pos + dir.offset()])
                    .filter(|&r| r != NULL_REGION)
                    .collect();
                adjacent.sort_unstable();
                adjacent.dedup();
                (adjacent.len() >= 2).then_some(Connector {
                    pos,
                    regions: adjacent,
                })
            })
            .collect()
    }

    pub(super) fn connect_regions(&mut self, params: &GenParams) -> Result<Connections, GenError> {
        let mut connectors = self.find_connectors();
        let mut sets = RegionSets::new(self.region_count as usize);
        let mut stats = Connections::default();

        debug!(
            connectors = connectors.len(),
            regions = sets.open_count(),
            "connecting regions"
        );

        // Too close to an opened door but still joining separate sets
        let mut crowded: Vec<Connector> = Vec::new();

        while sets.open_count() > 1 {
            let chosen = if !connectors.is_empty() {
                connectors.swap_remove(self.rng.index(connectors.len()))
            } else {
                crowded.retain(|con| con.joins_apart(&mut sets));
                if crowded.is_empty() {
                    return Err(GenError::IsolatedRegions {
                        open: sets.open_count(),
                    });
                }
                debug!(crowded = crowded.len(), "falling back to crowded connectors");
                crowded.swap_remove(self.rng.index(crowded.len()))
            };

            let mut roots: Vec<Region> = chosen.regions.iter().map(|&r| sets.find(r)).collect();
            roots.sort_unstable();
            roots.dedup();
            debug_assert!(roots.len() >= 2, "connector at {:?} joins nothing", chosen.pos);

            let mut dest = roots[0];
            for &source in &roots[1..] {
                if let Some(root) = sets.union(dest, source) {
                    dest = root;
                }
            }

            self.world.tiles[chosen.pos] = Tile::ClosedDoor;
            self.world.regions[chosen.pos] = dest;
            stats.doors += 1;

            let rng = &mut self.rng;
            let tiles = &mut self.world.tiles;
            let regions = &mut self.world.regions;
            connectors.retain(|con| {
                let apart = con.joins_apart(&mut sets);
                if con.pos.chebyshev(chosen.pos) <= DOOR_SPACING {
                    if apart {
                        crowded.push(con.clone());
                    }
                    return false;
                }
                if apart {
                    return true;
                }

                if rng.percent(params.connection_redundancy) {
                    tiles[con.pos] = Tile::ClosedDoor;
                    regions[con.pos] = sets.find(con.regions[0]);
                    stats.redundant_doors += 1;
                }
                false
            });
        }

        debug!(
            doors = stats.doors,
            redundant = stats.redundant_doors,
            "regions connected"
        );
        Ok(stats)
    }
}
