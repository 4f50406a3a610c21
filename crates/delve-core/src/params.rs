//! Generation parameters

use serde::{Deserialize, Serialize};

use crate::error::GenError;

/// Shape parameters for one generation run
///
/// `Default` returns the recommended values. Parameter files may leave out
/// any field; missing fields take the recommended value.
///
/// ```
/// use delve_core::GenParams;
///
/// let params = GenParams {
///     path_straightness: 30, // twistier corridors
///     ..Default::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenParams {
    /// Minimum room side, odd
    pub room_size_min: i32,

    /// Maximum room side, odd and at least `room_size_min`
    pub room_size_max: i32,

    /// Number of room placement attempts
    pub room_density: u32,

    /// Percent chance for a corridor to keep its previous direction
    pub path_straightness: u32,

    /// Percent chance for a redundant connector to become an extra door
    pub connection_redundancy: u32,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            room_size_min: 3,
            room_size_max: 9,
            room_density: 200,
            path_straightness: 100,
            connection_redundancy: 2,
        }
    }
}

impl GenParams {
    /// Check the parameter preconditions
    pub fn validate(&self) -> Result<(), GenError> {
        let invalid = |msg: String| -> Result<(), GenError> { Err(GenError::InvalidParams(msg)) };

        if self.room_size_min < 1 || self.room_size_min % 2 == 0 {
            return invalid(format!("room_size_min must be odd and positive, got {}", self.room_size_min));
        }
        if self.room_size_max % 2 == 0 {
            return invalid(format!("room_size_max must be odd, got {}", self.room_size_max));
        }
        if self.room_size_min > self.room_size_max {
            return invalid(format!(
                "room_size_min {} exceeds room_size_max {}",
                self.room_size_min, self.room_size_max
            ));
        }
        if self.room_density == 0 {
            return invalid("room_density must be positive".to_string());
        }
        if self.path_straightness > 100 {
            return invalid(format!("path_straightness is a percentage, got {}", self.path_straightness));
        }
        if self.connection_redundancy > 100 {
            return invalid(format!(
                "connection_redundancy is a percentage, got {}",
                self.connection_redundancy
            ));
        }
        Ok(())
    }
}
