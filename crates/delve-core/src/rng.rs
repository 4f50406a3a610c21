//! Seeded random source for level generation
//!
//! Uses a seeded ChaCha RNG so that the same seed and the same sequence of
//! draws always produce the same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geometry::{Dir, Point, Size};

/// Generator random number source
///
/// Wraps ChaCha8Rng and exposes the draws the generation phases need.
/// Single owner; not meant to be shared between generators.
#[derive(Debug, Clone)]
pub struct GenRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GenRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform in `0..n`
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Uniform index into a collection of `len` elements
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "index() on an empty collection");
        self.rng.gen_range(0..len)
    }

    /// Uniform cardinal direction
    pub fn cardinal(&mut self) -> Dir {
        Dir::from_index(self.rn2(4) as usize)
    }

    /// Odd integer in `min..=max`; both bounds must be odd
    fn odd_in(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min % 2 == 1 && max % 2 == 1 && min <= max, "bad odd range {min}..={max}");
        min + 2 * self.rn2(((max - min) / 2 + 1) as u32) as i32
    }

    /// Size whose width and height are independent odd values in `min..=max`
    pub fn odd_size(&mut self, min: i32, max: i32) -> Size {
        let w = self.odd_in(min, max);
        let h = self.odd_in(min, max);
        Size::new(w, h)
    }

    /// Point whose coordinates are odd values in `0..bound`
    ///
    /// Each axis of `bound` must be at least 2.
    pub fn odd_point(&mut self, bound: Size) -> Point {
        debug_assert!(bound.w >= 2 && bound.h >= 2, "no odd coordinate below {bound:?}");
        let x = 1 + 2 * self.rn2((bound.w / 2) as u32) as i32;
        let y = 1 + 2 * self.rn2((bound.h / 2) as u32) as i32;
        Point::new(x, y)
    }
}
