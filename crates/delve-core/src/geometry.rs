//! Points, sizes, rectangles and cardinal directions
//!
//! All coordinates are signed so that neighbor offsets can step outside the
//! grid and be rejected by a bounds check instead of wrapping.

use std::ops::{Add, Mul, Sub};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Width and height of a rectangle or grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// The size as an offset from the origin
    pub const fn point(self) -> Point {
        Point::new(self.w, self.h)
    }

    pub const fn area(self) -> i32 {
        self.w * self.h
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.w - rhs.w, self.h - rhs.h)
    }
}

/// Axis-aligned rectangle, position is the top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> i32 {
        self.pos.x + self.size.w
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> i32 {
        self.pos.y + self.size.h
    }

    /// Check if this rectangle shares at least one cell with another
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }

    /// Check if the point lies inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.pos.x && p.x < self.right() && p.y >= self.pos.y && p.y < self.bottom()
    }

    /// Center cell (rounded towards the top-left for even sizes)
    pub fn center(&self) -> Point {
        self.pos + Point::new(self.size.w / 2, self.size.h / 2)
    }

    /// All cells of the rectangle in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Rect { pos, size } = *self;
        (pos.y..pos.y + size.h).flat_map(move |y| (pos.x..pos.x + size.w).map(move |x| Point::new(x, y)))
    }
}

/// Cardinal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    /// Clockwise order, starting north
    pub const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    /// Unit step in this direction (y grows downwards)
    pub const fn offset(self) -> Point {
        match self {
            Dir::North => Point::new(0, -1),
            Dir::East => Point::new(1, 0),
            Dir::South => Point::new(0, 1),
            Dir::West => Point::new(-1, 0),
        }
    }

    pub const fn rotate_cw(self) -> Dir {
        match self {
            Dir::North => Dir::East,
            Dir::East => Dir::South,
            Dir::South => Dir::West,
            Dir::West => Dir::North,
        }
    }

    pub const fn from_index(index: usize) -> Dir {
        Self::ALL[index % 4]
    }

    const fn flag(self) -> DirSet {
        match self {
            Dir::North => DirSet::NORTH,
            Dir::East => DirSet::EAST,
            Dir::South => DirSet::SOUTH,
            Dir::West => DirSet::WEST,
        }
    }
}

bitflags! {
    /// Set of cardinal directions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirSet: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
    }
}

impl DirSet {
    pub fn has(self, dir: Dir) -> bool {
        self.contains(dir.flag())
    }

    pub fn with(self, dir: Dir) -> DirSet {
        self | dir.flag()
    }

    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(Point::new(1, 1), Size::new(3, 3));
        let b = Rect::new(Point::new(3, 3), Size::new(3, 3));
        let c = Rect::new(Point::new(5, 1), Size::new(3, 3));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Touching edges share no cell
        let d = Rect::new(Point::new(4, 1), Size::new(1, 1));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_rect_center_and_points() {
        let r = Rect::new(Point::new(1, 3), Size::new(5, 3));
        assert_eq!(r.center(), Point::new(3, 4));
        assert_eq!(r.points().count(), 15);
        assert!(r.points().all(|p| r.contains(p)));
    }

    #[test]
    fn test_dir_rotation_cycles() {
        let mut dir = Dir::North;
        for expected in [Dir::East, Dir::South, Dir::West, Dir::North] {
            dir = dir.rotate_cw();
            assert_eq!(dir, expected);
        }
    }

    #[test]
    fn test_dir_set() {
        let set = DirSet::empty().with(Dir::East).with(Dir::West);
        assert!(set.has(Dir::East));
        assert!(!set.has(Dir::North));
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_chebyshev() {
        assert_eq!(Point::new(0, 0).chebyshev(Point::new(1, 1)), 1);
        assert_eq!(Point::new(0, 0).chebyshev(Point::new(2, 1)), 2);
    }
}
