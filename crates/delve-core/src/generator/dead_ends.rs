//! Dead-end removal

use tracing::debug;

use crate::geometry::Dir;
use crate::tile::{NULL_REGION, Tile};
use crate::world::World;

/// Fill open cells with a single open neighbour until none are left
///
/// Returns the number of cells filled. Running it again on its own output
/// fills nothing.
pub fn remove_dead_ends(world: &mut World) -> usize {
    let mut filled = 0;
    let mut passes = 0;

    loop {
        passes += 1;
        let mut changed = false;

        for p in world.tiles.interior() {
            if !world.tiles[p].is_open() {
                continue;
            }
            let exits = Dir::ALL
                .iter()
                .filter(|dir| world.tiles[p + dir.offset()].is_open())
                .count();
            if exits == 1 {
                world.tiles[p] = Tile::Wall;
                world.regions[p] = NULL_REGION;
                filled += 1;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    debug!(filled, passes, "dead ends removed");
    filled
}
