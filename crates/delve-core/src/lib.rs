//! delve-core: deterministic rooms-and-mazes dungeon generator
//!
//! Given a seed and a handful of shape parameters, fills a fixed-size grid
//! with rooms, maze corridors, doors and a staircase. The result is fully
//! connected, has no dead ends, and labels every open cell with the region
//! it was carved in.
//!
//! ```
//! use delve_core::{GenParams, Generator, World};
//!
//! let mut world = World::new(41, 21).unwrap();
//! let report = Generator::new(42, &mut world)
//!     .generate(&GenParams::default())
//!     .unwrap();
//!
//! assert_eq!(world.stairs(), Some(report.stairs));
//! assert!(delve_core::analysis::is_connected(world.tiles()));
//! println!("{world}");
//! ```

pub mod analysis;
pub mod generator;
pub mod geometry;
pub mod grid;

mod error;
mod params;
mod rng;
mod tile;
mod union_find;
mod world;

pub use error::GenError;
pub use generator::{GenReport, Generator, generate_world, remove_dead_ends};
pub use params::GenParams;
pub use rng::GenRng;
pub use tile::{NULL_REGION, Region, Tile};
pub use union_find::RegionSets;
pub use world::World;
