//! World aggregate: tile grid, region grid and room list

use std::fmt;

use serde::Serialize;

use crate::error::GenError;
use crate::geometry::{Point, Rect, Size};
use crate::grid::Grid;
use crate::tile::{NULL_REGION, Region, Tile};

/// Generated level layout
///
/// Storage is sized once and reused by every generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct World {
    pub(crate) tiles: Grid<Tile>,
    pub(crate) regions: Grid<Region>,
    pub(crate) rooms: Vec<Rect>,
}

impl World {
    /// Allocate an all-wall world
    ///
    /// Both dimensions must be odd and greater than 1 so that carvable cells
    /// sit on odd coordinates with walls between them.
    pub fn new(width: i32, height: i32) -> Result<Self, GenError> {
        if width <= 1 || height <= 1 || width % 2 == 0 || height % 2 == 0 {
            return Err(GenError::InvalidDimensions { width, height });
        }
        let size = Size::new(width, height);
        Ok(Self {
            tiles: Grid::new(size, Tile::Wall),
            regions: Grid::new(size, NULL_REGION),
            rooms: Vec::new(),
        })
    }

    /// Back to all-wall, uncarved, without rooms
    pub fn reset(&mut self) {
        self.tiles.fill(Tile::Wall);
        self.regions.fill(NULL_REGION);
        self.rooms.clear();
    }

    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    pub fn size(&self) -> Size {
        self.tiles.size()
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    pub fn regions(&self) -> &Grid<Region> {
        &self.regions
    }

    /// Accepted rooms in placement order; the first one holds the stairs
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    pub fn tile(&self, p: Point) -> Tile {
        self.tiles[p]
    }

    pub fn region(&self, p: Point) -> Region {
        self.regions[p]
    }

    /// Position of the stairs, if the level has any
    pub fn stairs(&self) -> Option<Point> {
        self.tiles.rect().points().find(|&p| self.tiles[p] == Tile::Stairs)
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            let line: String = row.iter().map(Tile::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_must_be_odd() {
        assert!(World::new(21, 21).is_ok());
        assert_eq!(
            World::new(20, 21).unwrap_err(),
            GenError::InvalidDimensions { width: 20, height: 21 }
        );
        assert!(World::new(21, 4).is_err());
        assert!(World::new(1, 5).is_err());
        assert!(World::new(3, 3).is_ok());
    }

    #[test]
    fn test_new_world_is_solid() {
        let world = World::new(5, 7).unwrap();
        assert_eq!(world.size(), Size::new(5, 7));
        assert!(world.tiles().iter().all(|&t| t == Tile::Wall));
        assert!(world.regions().iter().all(|&r| r == NULL_REGION));
        assert!(world.rooms().is_empty());
        assert_eq!(world.stairs(), None);
    }

    #[test]
    fn test_reset() {
        let mut world = World::new(5, 5).unwrap();
        world.tiles[Point::new(1, 1)] = Tile::Room;
        world.regions[Point::new(1, 1)] = 0;
        world.rooms.push(Rect::new(Point::new(1, 1), Size::new(1, 1)));
        world.reset();
        assert_eq!(world, World::new(5, 5).unwrap());
    }

    #[test]
    fn test_display() {
        let mut world = World::new(3, 3).unwrap();
        world.tiles[Point::new(1, 1)] = Tile::Stairs;
        assert_eq!(world.to_string(), "###\n#>#\n###\n");
        assert_eq!(world.stairs(), Some(Point::new(1, 1)));
    }
}
