//! Growing-tree maze carving
//!
//! Every odd cell still solid after room placement becomes the start of a
//! new maze region. Corridors advance two cells at a time so walls stay on
//! the even lattice between them.

use tracing::debug;

use super::Generator;
use crate::error::GenError;
use crate::geometry::{Dir, DirSet, Point};
use crate::params::GenParams;
use crate::tile::Tile;

impl Generator<'_> {
    pub(super) fn grow_mazes(&mut self, params: &GenParams) -> Result<(), GenError> {
        let size = self.world.tiles.size();
        let before = self.region_count;

        for y in (1..size.h).step_by(2) {
            for x in (1..size.w).step_by(2) {
                let start = Point::new(x, y);
                if self.world.tiles[start] == Tile::Wall {
                    self.grow_maze(start, params)?;
                }
            }
        }

        debug!(mazes = self.region_count - before, "mazes grown");
        Ok(())
    }

    fn grow_maze(&mut self, start: Point, params: &GenParams) -> Result<(), GenError> {
        let region = self.start_region()?;
        self.carve(start, Tile::Path, region);

        let mut cells = vec![start];
        let mut last_dir: Option<Dir> = None;

        while let Some(&cell) = cells.last() {
            let unmade = Dir::ALL
                .into_iter()
                .filter(|&dir| self.can_carve(cell, dir))
                .fold(DirSet::empty(), DirSet::with);

            if unmade.is_empty() {
                cells.pop();
                last_dir = None;
                continue;
            }

            let mut dir = self.random_dir(unmade);
            if let Some(last) = last_dir
                && unmade.has(last)
                && self.rng.percent(params.path_straightness)
            {
                dir = last;
            }

            let step = dir.offset();
            self.carve(cell + step, Tile::Path, region);
            self.carve(cell + step * 2, Tile::Path, region);
            cells.push(cell + step * 2);
            last_dir = Some(dir);
        }
        Ok(())
    }

    /// Two cells over is still solid and not on the border
    fn can_carve(&self, pos: Point, dir: Dir) -> bool {
        let step = dir.offset();
        self.world.tiles.contains(pos + step * 3) && self.world.tiles[pos + step * 2] == Tile::Wall
    }

    /// Uniform start direction, rotated clockwise until it is allowed
    fn random_dir(&mut self, dirs: DirSet) -> Dir {
        debug_assert!(!dirs.is_empty());
        let mut dir = self.rng.cardinal();
        while !dirs.has(dir) {
            dir = dir.rotate_cw();
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::World;
    use crate::analysis;
    use crate::tile::NULL_REGION;
    use proptest::prelude::*;

    #[test]
    fn test_maze_fills_empty_grid() {
        let mut world = World::new(21, 15).unwrap();
        let mut generator = Generator::new(4, &mut world);
        generator.grow_mazes(&GenParams::default()).unwrap();

        // No rooms: a single perfect maze covers every odd cell
        assert_eq!(generator.region_count, 1);
        for y in (1..15).step_by(2) {
            for x in (1..21).step_by(2) {
                assert_eq!(world.tile(Point::new(x, y)), Tile::Path);
            }
        }
        assert!(analysis::is_connected(world.tiles()));
        // Border stays solid
        assert!(world.tiles().rect().points().filter(|&p| world.tiles().on_border(p)).all(|p| world.tile(p) == Tile::Wall));
    }

    #[test]
    fn test_even_cells_stay_solid() {
        let mut world = World::new(15, 15).unwrap();
        Generator::new(6, &mut world).grow_mazes(&GenParams { path_straightness: 0, ..Default::default() }).unwrap();
        for y in (0..15).step_by(2) {
            for x in (0..15).step_by(2) {
                assert_eq!(world.tile(Point::new(x, y)), Tile::Wall);
            }
        }
    }

    #[test]
    fn test_perfect_maze_is_a_tree() {
        let mut world = World::new(25, 25).unwrap();
        Generator::new(10, &mut world).grow_mazes(&GenParams { path_straightness: 50, ..Default::default() }).unwrap();
        // A spanning tree over n cells carves exactly n - 1 passages
        let cells = 12 * 12;
        let open = world.tiles().iter().filter(|t| t.is_open()).count();
        assert_eq!(open, cells + cells - 1);
    }

    #[test]
    fn test_mazes_cover_around_rooms() {
        let mut world = World::new(31, 31).unwrap();
        let mut generator = Generator::new(12, &mut world);
        generator.place_rooms(&GenParams::default()).unwrap();
        generator.grow_mazes(&GenParams::default()).unwrap();

        for y in (1..31).step_by(2) {
            for x in (1..31).step_by(2) {
                let p = Point::new(x, y);
                assert!(world.tile(p).is_open());
                assert_ne!(world.region(p), NULL_REGION);
            }
        }
        assert!(analysis::uncovered_cells(world.tiles(), world.regions()).is_empty());
    }

    #[test]
    fn test_random_dir_stays_in_allowed_set() {
        let mut world = World::new(3, 3).unwrap();
        let mut generator = Generator::new(0, &mut world);
        let only_west = DirSet::empty().with(Dir::West);
        for _ in 0..50 {
            assert_eq!(generator.random_dir(only_west), Dir::West);
        }
        let north_south = DirSet::NORTH | DirSet::SOUTH;
        for _ in 0..50 {
            assert!(north_south.has(generator.random_dir(north_south)));
        }
    }

    #[test]
    fn test_straight_corridors_are_longer() {
        fn straight_runs(straightness: u32) -> usize {
            let mut world = World::new(41, 41).unwrap();
            Generator::new(77, &mut world)
                .grow_mazes(&GenParams { path_straightness: straightness, ..Default::default() })
                .unwrap();
            // Count corridor cells continuing straight through (open both sides on one axis only)
            world
                .tiles()
                .interior()
                .filter(|&p| world.tile(p).is_open())
                .filter(|&p| {
                    let open = |d: Dir| world.tile(p + d.offset()).is_open();
                    let horizontal = open(Dir::East) && open(Dir::West);
                    let vertical = open(Dir::North) && open(Dir::South);
                    (horizontal && !open(Dir::North) && !open(Dir::South))
                        || (vertical && !open(Dir::East) && !open(Dir::West))
                })
                .count()
        }
        assert!(straight_runs(100) > straight_runs(0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_rooms_and_mazes_cover_odd_cells(
            seed in any::<u64>(),
            half_w in 1..30i32,
            half_h in 1..20i32,
            room_size in (0..=4i32).prop_map(|k| 2 * k + 1),
            straightness in 0..=100u32,
        ) {
            let (w, h) = (2 * half_w + 1, 2 * half_h + 1);
            let params = GenParams {
                room_size_min: room_size.min(w.min(h) - 2),
                room_size_max: room_size.min(w.min(h) - 2),
                path_straightness: straightness,
                ..Default::default()
            };
            let mut world = World::new(w, h).unwrap();
            let mut generator = Generator::new(seed, &mut world);
            generator.place_rooms(&params).unwrap();
            generator.grow_mazes(&params).unwrap();
            let regions = generator.region_count;

            for y in (1..h).step_by(2) {
                for x in (1..w).step_by(2) {
                    let p = Point::new(x, y);
                    prop_assert!(world.tile(p).is_open(), "{:?} solid:\n{}", p, world);
                    prop_assert!(world.region(p) < regions);
                }
            }
            prop_assert!(analysis::uncovered_cells(world.tiles(), world.regions()).is_empty());
            prop_assert!(world.tiles().rect().points().filter(|&p| world.tiles().on_border(p)).all(|p| world.tile(p) == Tile::Wall));
        }
    }
}
