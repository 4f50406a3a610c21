//! Dense 2D cell storage
//!
//! Row-major, addressed by [`Point`]. One grid holds tiles, a second one of
//! the same size holds region ids.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Rectangular array of `width * height` cells
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid<T> {
    size: Size,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn new(size: Size, value: T) -> Self {
        assert!(size.w >= 0 && size.h >= 0, "negative grid size {size:?}");
        Self {
            size,
            cells: vec![value; size.area() as usize],
        }
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Set every cell of `rect` to `value`
    ///
    /// The rectangle must lie inside the grid.
    pub fn fill_rect(&mut self, rect: Rect, value: T) {
        assert!(
            self.contains(rect.pos) && rect.right() <= self.size.w && rect.bottom() <= self.size.h,
            "rect {rect:?} outside grid {:?}",
            self.size
        );
        for y in rect.pos.y..rect.bottom() {
            let start = self.offset(Point::new(rect.pos.x, y));
            self.cells[start..start + rect.size.w as usize].fill(value.clone());
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> i32 {
        self.size.w
    }

    pub fn height(&self) -> i32 {
        self.size.h
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The whole grid as a rectangle at the origin
    pub fn rect(&self) -> Rect {
        Rect::new(Point::default(), self.size)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size.w && p.y < self.size.h
    }

    /// Check if the point is on the outermost ring of cells
    pub fn on_border(&self, p: Point) -> bool {
        p.x == 0 || p.y == 0 || p.x == self.size.w - 1 || p.y == self.size.h - 1
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        if self.contains(p) {
            Some(&self.cells[self.offset(p)])
        } else {
            None
        }
    }

    /// All cells except the outer border, row-major
    pub fn interior(&self) -> impl Iterator<Item = Point> + use<T> {
        let Size { w, h } = self.size;
        (1..h - 1).flat_map(move |y| (1..w - 1).map(move |x| Point::new(x, y)))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.w.max(1) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    fn offset(&self, p: Point) -> usize {
        (p.y * self.size.w + p.x) as usize
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        assert!(self.contains(p), "point {p:?} outside grid {:?}", self.size);
        &self.cells[self.offset(p)]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        assert!(self.contains(p), "point {p:?} outside grid {:?}", self.size);
        let offset = self.offset(p);
        &mut self.cells[offset]
    }
}
