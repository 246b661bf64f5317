//! Feature-level diameter: extraction, hull, canonicalization and sweep.

use caliper_core::{
    BearingFn, Config, Coordinate, Diameter, DiameterEngine, DistanceFn, Error, Result, Ring,
};
use geo::CoordsIter;

use crate::extract::coordinates_of;
use crate::hull::{HullExtractor, HullKind};
use crate::metric::GreatCircle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`GeoDiameter`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoConfig {
    /// Sweep configuration.
    pub sweep: Config,
    /// Hull algorithm.
    pub hull: HullKind,
}

impl GeoConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sweep configuration.
    pub fn with_sweep(mut self, sweep: Config) -> Self {
        self.sweep = sweep;
        self
    }

    /// Sets the hull algorithm.
    pub fn with_hull(mut self, hull: HullKind) -> Self {
        self.hull = hull;
        self
    }

    /// Checks every value.
    pub fn validate(&self) -> Result<()> {
        self.sweep.validate()?;
        self.hull.validate()
    }
}

/// Measures the diameter of geometries.
///
/// ```rust
/// use caliper_geo::{GeoDiameter, GeoConfig};
/// use geo::polygon;
///
/// let area = polygon![
///     (x: 10.0, y: 50.0),
///     (x: 11.0, y: 50.0),
///     (x: 11.0, y: 51.0),
///     (x: 10.0, y: 51.0),
/// ];
///
/// let km = GeoDiameter::new(GeoConfig::default()).unwrap().diameter(&area).unwrap();
/// assert!(km > 130.0 && km < 140.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeoDiameter<M = GreatCircle, H = HullKind> {
    engine: DiameterEngine,
    hull: H,
    metric: M,
}

impl GeoDiameter {
    /// Creates a measurer using the great-circle metric in kilometres.
    pub fn new(config: GeoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: DiameterEngine::new(config.sweep),
            hull: config.hull,
            metric: GreatCircle::default(),
        })
    }

    /// Creates a measurer with the default configuration.
    pub fn default_config() -> Self {
        Self {
            engine: DiameterEngine::default(),
            hull: HullKind::default(),
            metric: GreatCircle::default(),
        }
    }
}

impl<M, H> GeoDiameter<M, H>
where
    M: DistanceFn + BearingFn,
    H: HullExtractor,
{
    /// Replaces the metric.
    pub fn with_metric<M2>(self, metric: M2) -> GeoDiameter<M2, H>
    where
        M2: DistanceFn + BearingFn,
    {
        GeoDiameter {
            engine: self.engine,
            hull: self.hull,
            metric,
        }
    }

    /// Replaces the hull extractor.
    pub fn with_hull<H2>(self, hull: H2) -> GeoDiameter<M, H2>
    where
        H2: HullExtractor,
    {
        GeoDiameter {
            engine: self.engine,
            hull,
            metric: self.metric,
        }
    }

    /// Returns the metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Measures the diameter of a point set.
    ///
    /// Fails with [`Error::InvalidInput`] when `points` is empty.
    pub fn measure_points(&self, points: &[Coordinate]) -> Result<Diameter> {
        if points.is_empty() {
            return Err(Error::InvalidInput("no coordinates to measure".into()));
        }

        let hull = self.hull.hull(points);
        log::debug!("hull of {} points has {} vertices", points.len(), hull.len());

        let ring = Ring::new(hull)?;
        self.engine.measure(&ring, &self.metric, &self.metric)
    }

    /// Measures the diameter of any geometry, including collections.
    pub fn measure<G>(&self, geometry: &G) -> Result<Diameter>
    where
        G: CoordsIter<Scalar = f64>,
    {
        self.measure_points(&coordinates_of(geometry))
    }

    /// Diameter of a geometry in the metric's unit.
    pub fn diameter<G>(&self, geometry: &G) -> Result<f64>
    where
        G: CoordsIter<Scalar = f64>,
    {
        self.measure(geometry).map(|d| d.length)
    }
}
