//! Sweep configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tolerance, in radians, for comparing caliper angles against π.
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 1e-9;

/// How the ring's winding is brought to counter-clockwise before the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Winding {
    /// Reverse the ring when its signed area is negative.
    #[default]
    Detect,
    /// Always reverse (the hull source is known to emit clockwise rings).
    Reverse,
    /// Use the ring exactly as given.
    Preserve,
}

/// Configuration for [`DiameterEngine`](crate::DiameterEngine).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Tolerance for angle comparisons against π, in radians.
    ///
    /// Two calipers whose gap is within this tolerance of π rotate together.
    pub angle_tolerance: f64,

    /// Winding canonicalization policy.
    pub winding: Winding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            winding: Winding::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the angle tolerance in radians.
    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Sets the winding policy.
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.angle_tolerance.is_finite() || self.angle_tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "angle tolerance must be finite and non-negative, got {}",
                self.angle_tolerance
            )));
        }
        if self.angle_tolerance >= std::f64::consts::FRAC_PI_2 {
            return Err(Error::InvalidConfig(format!(
                "angle tolerance {} would merge distinct caliper directions",
                self.angle_tolerance
            )));
        }
        Ok(())
    }
}
