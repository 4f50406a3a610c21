//! Room and exit placement

use tracing::{debug, trace};

use super::Generator;
use crate::error::GenError;
use crate::geometry::{Point, Rect};
use crate::params::GenParams;
use crate::tile::Tile;

impl Generator<'_> {
    /// Try `room_density` random rooms, keeping those that overlap nothing
    ///
    /// A rejected attempt is not retried. Sizes that cannot fit inside the
    /// border count as rejected attempts.
    pub(super) fn place_rooms(&mut self, params: &GenParams) -> Result<usize, GenError> {
        let grid = self.world.tiles.size();

        for _ in 0..params.room_density {
            let size = self.rng.odd_size(params.room_size_min, params.room_size_max);
            let bound = grid - size;
            if bound.w < 2 || bound.h < 2 {
                continue;
            }
            let rect = Rect::new(self.rng.odd_point(bound), size);

            if self.world.rooms.iter().any(|room| room.intersects(&rect)) {
                continue;
            }

            self.world.rooms.push(rect);
            let region = self.start_region()?;
            self.carve_rect(rect, Tile::Room, region);
            trace!(region, x = rect.pos.x, y = rect.pos.y, w = rect.size.w, h = rect.size.h, "room placed");
        }

        let placed = self.world.rooms.len();
        debug!(placed, attempts = params.room_density, "rooms placed");
        Ok(placed)
    }

    /// Put the stairs in the center of the first room
    pub(super) fn place_exit(&mut self, params: &GenParams) -> Result<Point, GenError> {
        let center = self
            .world
            .rooms
            .first()
            .map(Rect::center)
            .ok_or(GenError::NoRoomsPlaced {
                attempts: params.room_density,
            })?;
        self.world.tiles[center] = Tile::Stairs;
        Ok(center)
    }
}
