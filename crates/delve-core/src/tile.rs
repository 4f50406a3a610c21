//! Map cell kinds and region labels

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell kind
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Tile {
    #[default]
    Wall = 0,
    Room = 1,
    Path = 2,
    ClosedDoor = 3,
    Stairs = 4,
}

impl Tile {
    /// Anything that is not solid wall
    pub const fn is_open(&self) -> bool {
        !matches!(self, Tile::Wall)
    }

    pub const fn is_door(&self) -> bool {
        matches!(self, Tile::ClosedDoor)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Room => '.',
            Tile::Path => ',',
            Tile::ClosedDoor => '+',
            Tile::Stairs => '>',
        }
    }
}

/// Label of a contiguous area carved by one room placement or maze run
pub type Region = u32;

/// Region of cells that were never carved
pub const NULL_REGION: Region = Region::MAX;
