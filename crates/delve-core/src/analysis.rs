//! Map queries used to check generated levels

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::geometry::{Dir, Point};
use crate::grid::Grid;
use crate::tile::{NULL_REGION, Region, Tile};

/// Open cells adjacent to `p` in the four cardinal directions
fn open_neighbors(tiles: &Grid<Tile>, p: Point) -> impl Iterator<Item = Point> + '_ {
    Dir::ALL
        .into_iter()
        .map(move |dir| p + dir.offset())
        .filter(move |&n| tiles.get(n).is_some_and(Tile::is_open))
}

/// Check that every open cell can reach every other one
///
/// Doors count as passable. A grid with no open cells is connected.
pub fn is_connected(tiles: &Grid<Tile>) -> bool {
    let mut points = tiles.rect().points().filter(|&p| tiles[p].is_open());
    let Some(start) = points.next() else {
        return true;
    };
    let total = 1 + points.count();

    let mut seen = Grid::new(tiles.size(), false);
    seen[start] = true;
    let mut stack = vec![start];
    let mut reached = 1;

    while let Some(p) = stack.pop() {
        for n in open_neighbors(tiles, p) {
            if !seen[n] {
                seen[n] = true;
                reached += 1;
                stack.push(n);
            }
        }
    }

    reached == total
}

/// Open cells with exactly one open neighbour
pub fn dead_ends(tiles: &Grid<Tile>) -> Vec<Point> {
    tiles
        .interior()
        .filter(|&p| tiles[p].is_open() && open_neighbors(tiles, p).count() == 1)
        .collect()
}

/// Open cells without a region label
pub fn uncovered_cells(tiles: &Grid<Tile>, regions: &Grid<Region>) -> Vec<Point> {
    tiles
        .rect()
        .points()
        .filter(|&p| tiles[p].is_open() && regions[p] == NULL_REGION)
        .collect()
}

pub fn door_count(tiles: &Grid<Tile>) -> usize {
    tiles.iter().filter(|t| t.is_door()).count()
}

/// Number of cells of each tile kind, every kind listed
pub fn tile_counts(tiles: &Grid<Tile>) -> BTreeMap<String, usize> {
    Tile::iter()
        .map(|kind| (kind.to_string(), tiles.iter().filter(|&&t| t == kind).count()))
        .collect()
}
