//! Rooms-and-mazes level generation
//!
//! Runs a fixed pipeline over a [`World`]:
//! 1. Clear the grid to solid wall
//! 2. Place non-overlapping rooms
//! 3. Put the stairs in the middle of the first room
//! 4. Fill every remaining odd cell with maze corridors
//! 5. Open doors between regions until everything is connected
//! 6. Fill in dead ends
//!
//! Based on Bob Nystrom's "Rooms and Mazes"
//! (<http://journal.stuffwithstuff.com/2014/12/21/rooms-and-mazes/>).

mod connect;
mod dead_ends;
mod maze;
mod rooms;

pub use dead_ends::remove_dead_ends;

use serde::Serialize;
use tracing::debug;

use crate::error::GenError;
use crate::geometry::{Point, Rect};
use crate::params::GenParams;
use crate::rng::GenRng;
use crate::tile::{NULL_REGION, Region, Tile};
use crate::world::World;

/// Counts describing one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GenReport {
    pub seed: u64,
    pub rooms: usize,
    /// Rooms plus maze runs
    pub regions: usize,
    /// Doors opened to merge regions
    pub doors: usize,
    /// Extra doors on connectors that had become redundant
    pub redundant_doors: usize,
    /// Cells turned back into wall by dead-end removal
    pub dead_ends_filled: usize,
    pub stairs: Point,
}

/// Level generator bound to one world for its lifetime
pub struct Generator<'w> {
    rng: GenRng,
    world: &'w mut World,
    /// Regions started in the current run; ids are `0..region_count`
    region_count: Region,
}

impl<'w> Generator<'w> {
    pub fn new(seed: u64, world: &'w mut World) -> Self {
        Self::with_rng(GenRng::new(seed), world)
    }

    pub fn with_rng(rng: GenRng, world: &'w mut World) -> Self {
        Self {
            rng,
            world,
            region_count: 0,
        }
    }

    /// Regenerate the whole world
    ///
    /// Any error leaves the world half built; it must not be used until a
    /// later call succeeds.
    ///
    /// Stairs in a first room that is one cell thick can be walled over by
    /// dead-end removal. [`GenReport::stairs`] still names where they were
    /// placed.
    pub fn generate(&mut self, params: &GenParams) -> Result<GenReport, GenError> {
        params.validate()?;

        self.world.reset();
        self.region_count = 0;

        let rooms = self.place_rooms(params)?;
        let stairs = self.place_exit(params)?;
        self.grow_mazes(params)?;
        let connections = self.connect_regions(params)?;
        let dead_ends_filled = remove_dead_ends(self.world);

        let report = GenReport {
            seed: self.rng.seed(),
            rooms,
            regions: self.region_count as usize,
            doors: connections.doors,
            redundant_doors: connections.redundant_doors,
            dead_ends_filled,
            stairs,
        };
        debug!(?report, "level generated");
        Ok(report)
    }

    /// Allocate the next region id
    fn start_region(&mut self) -> Result<Region, GenError> {
        let region = self.region_count;
        if region == NULL_REGION {
            return Err(GenError::RegionOverflow(region));
        }
        self.region_count += 1;
        Ok(region)
    }

    fn carve(&mut self, p: Point, tile: Tile, region: Region) {
        self.world.tiles[p] = tile;
        self.world.regions[p] = region;
    }

    fn carve_rect(&mut self, rect: Rect, tile: Tile, region: Region) {
        self.world.tiles.fill_rect(rect, tile);
        self.world.regions.fill_rect(rect, region);
    }
}

/// Generate `world` from `seed` with the recommended parameters
pub fn generate_world(world: &mut World, seed: u64) -> Result<GenReport, GenError> {
    Generator::new(seed, world).generate(&GenParams::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;

    #[test]
    fn test_generate_default() {
        let mut world = World::new(41, 21).unwrap();
        let report = generate_world(&mut world, 42).unwrap();

        assert!(report.rooms >= 1);
        assert_eq!(report.rooms, world.rooms().len());
        assert!(report.regions >= report.rooms);
        assert_eq!(world.stairs(), Some(report.stairs));
        assert_eq!(report.stairs, world.rooms()[0].center());
        assert!(analysis::is_connected(world.tiles()));
        assert!(analysis::dead_ends(world.tiles()).is_empty());
    }

    #[test]
    fn test_generate_twice_on_same_instance() {
        let mut world = World::new(31, 31).unwrap();
        let params = GenParams::default();
        let first = {
            let mut generator = Generator::new(9, &mut world);
            generator.generate(&params).unwrap();
            // Second run draws from where the first one stopped
            generator.generate(&params).unwrap()
        };
        assert!(first.regions >= 1);
        assert!(analysis::is_connected(world.tiles()));
        assert!(world.regions().iter().all(|&r| r == NULL_REGION || (r as usize) < first.regions));
    }

    #[test]
    fn test_invalid_params_leave_world_untouched() {
        let mut world = World::new(21, 21).unwrap();
        generate_world(&mut world, 1).unwrap();
        let before = world.clone();

        let params = GenParams { room_size_min: 2, ..Default::default() };
        let err = Generator::new(1, &mut world).generate(&params).unwrap_err();
        assert!(matches!(err, GenError::InvalidParams(_)));
        assert_eq!(world, before);
    }

    #[test]
    fn test_start_region_overflow() {
        let mut world = World::new(3, 3).unwrap();
        let mut generator = Generator::new(0, &mut world);
        generator.region_count = NULL_REGION - 1;
        assert_eq!(generator.start_region(), Ok(NULL_REGION - 1));
        assert_eq!(generator.start_region(), Err(GenError::RegionOverflow(NULL_REGION)));
    }
}
