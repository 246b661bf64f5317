//! Coordinate type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position given as (longitude, latitude), or (x, y) for planar metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Longitude in degrees (x).
    pub lon: f64,
    /// Latitude in degrees (y).
    pub lat: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude.
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Returns the coordinate as an `(x, y)` tuple.
    #[inline]
    pub fn xy(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}
