//! Generation errors
//!
//! Every variant is a violated precondition: the map being generated must
//! not be used once one of these is returned.

use thiserror::Error;

use crate::tile::Region;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("World dimensions must be odd and greater than 1, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("No room could be placed in {attempts} attempts, cannot place the exit")]
    NoRoomsPlaced { attempts: u32 },

    #[error("{open} regions remain but no connector is left to join them")]
    IsolatedRegions { open: usize },

    #[error("Region ids exhausted after {0} regions")]
    RegionOverflow(Region),
}
