use crate::error::HarmonyError;
use std::fmt;

/// Which way a monochromatic scheme steps saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward 1.0 (`1`)
    #[default]
    Lighter,
    /// Toward 0.2 (`-1`)
    Darker,
}

impl Direction {
    pub fn as_i32(self) -> i32 {
        match self {
            Direction::Lighter => 1,
            Direction::Darker => -1,
        }
    }

    pub(crate) fn sign(self) -> f64 {
        f64::from(self.as_i32())
    }
}

impl TryFrom<i32> for Direction {
    type Error = HarmonyError;

    fn try_from(d: i32) -> Result<Self, Self::Error> {
        match d {
            1 => Ok(Direction::Lighter),
            -1 => Ok(Direction::Darker),
            other => {
                tracing::debug!(direction = other, "Rejected monochromatic direction");
                Err(HarmonyError::invalid_direction(other))
            }
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}
