//! Great-circle distance and bearing.

use caliper_core::{BearingFn, Coordinate, DistanceFn};
use geo::{Bearing, Distance, Haversine, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of length reported by [`GreatCircle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    /// Kilometres.
    #[default]
    Kilometers,
    /// Metres.
    Meters,
    /// Statute miles.
    Miles,
}

impl LengthUnit {
    /// Number of this unit in one metre.
    pub fn per_meter(self) -> f64 {
        match self {
            LengthUnit::Kilometers => 1e-3,
            LengthUnit::Meters => 1.0,
            LengthUnit::Miles => 1.0 / 1609.344,
        }
    }
}

/// Haversine metric on a spherical Earth, for `(lon, lat)` coordinates in degrees.
///
/// Meridians converge towards the poles, so the same direction has a
/// different compass bearing at two places. [`BearingFn::convergence`] reports
/// that rotation along the great circle between them. Without it, edge angles
/// taken at vertices a few degrees of longitude apart drift enough at high
/// latitude to steer the calipers past the farthest pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreatCircle {
    unit: LengthUnit,
}

impl GreatCircle {
    /// Creates a metric reporting lengths in `unit`.
    pub fn new(unit: LengthUnit) -> Self {
        Self { unit }
    }

    /// Returns the unit lengths are reported in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

/// Converts a coordinate to a `geo` point.
#[inline]
pub fn to_point(c: Coordinate) -> Point<f64> {
    Point::new(c.lon, c.lat)
}

impl DistanceFn for GreatCircle {
    fn distance(&self, p: Coordinate, q: Coordinate) -> f64 {
        Haversine::distance(to_point(p), to_point(q)) * self.unit.per_meter()
    }
}

/// Maps degrees into `(-180, 180]`.
fn half_turn(deg: f64) -> f64 {
    let deg = deg.rem_euclid(360.0);
    if deg > 180.0 {
        deg - 360.0
    } else {
        deg
    }
}

impl BearingFn for GreatCircle {
    fn bearing(&self, p: Coordinate, q: Coordinate) -> f64 {
        half_turn(Haversine::bearing(to_point(p), to_point(q)))
    }

    /// Final bearing of the great circle from `p` to `q` minus its initial bearing.
    fn convergence(&self, p: Coordinate, q: Coordinate) -> f64 {
        if p == q {
            return 0.0;
        }
        let (p, q) = (to_point(p), to_point(q));
        let initial = Haversine::bearing(p, q);
        let last = Haversine::bearing(q, p) + 180.0;
        half_turn(last - initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_degree_of_latitude() {
        let d = GreatCircle::default().distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        // Mean Earth radius 6371.0088 km
        assert_relative_eq!(d, 111.195, epsilon = 0.01);
    }

    #[test]
    fn test_units() {
        let p = Coordinate::new(-0.1278, 51.5074);
        let q = Coordinate::new(2.3522, 48.8566);
        let km = GreatCircle::new(LengthUnit::Kilometers).distance(p, q);
        let m = GreatCircle::new(LengthUnit::Meters).distance(p, q);
        let mi = GreatCircle::new(LengthUnit::Miles).distance(p, q);
        assert_relative_eq!(m, km * 1000.0, max_relative = 1e-12);
        assert_relative_eq!(mi, km / 1.609344, max_relative = 1e-12);
        assert!(km > 340.0 && km < 345.0, "London-Paris {} km", km);
    }

    #[test]
    fn test_bearing_range() {
        let o = Coordinate::new(10.0, 10.0);
        let metric = GreatCircle::default();
        assert_relative_eq!(metric.bearing(o, Coordinate::new(10.0, 11.0)), 0.0, epsilon = 1e-9);
        assert_relative_eq!(metric.bearing(o, Coordinate::new(10.0, 9.0)), 180.0, epsilon = 1e-9);

        let east = metric.bearing(o, Coordinate::new(11.0, 10.0));
        assert!(east > 80.0 && east < 90.0, "east bearing {}", east);

        let west = metric.bearing(o, Coordinate::new(9.0, 10.0));
        assert!(west < -80.0 && west > -90.0, "west bearing {}", west);
    }

    #[test]
    fn test_convergence() {
        let metric = GreatCircle::default();
        let p = Coordinate::new(0.0, 60.0);

        // Along a meridian or the equator north does not rotate
        assert_relative_eq!(metric.convergence(p, Coordinate::new(0.0, 70.0)), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            metric.convergence(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 0.0)),
            0.0,
            epsilon = 1e-9
        );
        assert_eq!(metric.convergence(p, p), 0.0);

        // Heading east along 60°N the great circle bends south
        let east = metric.convergence(p, Coordinate::new(10.0, 60.0));
        assert!(east > 8.0 && east < 9.0, "convergence {}", east);
        let west = metric.convergence(p, Coordinate::new(-10.0, 60.0));
        assert_relative_eq!(west, -east, epsilon = 1e-9);
    }
}
