//! Region merge tracking
//!
//! Disjoint sets over region ids with path compression and union by rank.

use crate::tile::Region;

/// Tracks which regions have been joined by doors
#[derive(Debug, Clone)]
pub struct RegionSets {
    parent: Vec<Region>,
    rank: Vec<u8>,
    /// Number of distinct sets
    open: usize,
}

impl RegionSets {
    /// Create `count` singleton sets, one per region `0..count`
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count as Region).collect(),
            rank: vec![0; count],
            open: count,
        }
    }

    /// Representative of the set containing `region`
    pub fn find(&mut self, region: Region) -> Region {
        let mut root = region;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = region;
        while self.parent[cur as usize] != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`, returning the new representative
    ///
    /// Returns `None` if they were already joined.
    pub fn union(&mut self, a: Region, b: Region) -> Option<Region> {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return None;
        }
        let (root, child) = match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            std::cmp::Ordering::Less => (rb, ra),
            std::cmp::Ordering::Greater => (ra, rb),
            std::cmp::Ordering::Equal => {
                self.rank[ra as usize] += 1;
                (ra, rb)
            }
        };
        self.parent[child as usize] = root;
        self.open -= 1;
        Some(root)
    }

    pub fn connected(&mut self, a: Region, b: Region) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of sets still separate from each other
    pub fn open_count(&self) -> usize {
        self.open
    }
}
