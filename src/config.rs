//! UAV mission configuration: fixed endpoints, waypoint layout and no-fly zones.

use crate::error::{ConfigError, Result};
use crate::geometry::NoFlyZone;
use crate::math::Point3;

/// Read-only inputs shared by every fitness evaluation of one mission.
///
/// # Example
///
/// ```
/// use nofly::{NoFlyZone, UavConfig};
/// use nofly::math::Point3;
///
/// let zones = vec![NoFlyZone::new(50.0, 50.0, 80.0, 10.0)?];
/// let config = UavConfig::new(Point3::new(0.0, 0.0, 10.0), Point3::new(100.0, 100.0, 10.0), zones)?;
/// assert_eq!(config.point_dim(), 3);
/// # Ok::<(), nofly::NoflyError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UavConfig {
    start: Point3,
    goal: Point3,
    #[cfg_attr(feature = "serde", serde(default = "default_point_dim"))]
    point_dim: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    zones: Vec<NoFlyZone>,
}

#[cfg(feature = "serde")]
fn default_point_dim() -> usize {
    3
}

impl UavConfig {
    /// Creates a configuration with three-dimensional waypoints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteEndpoint`] if start or goal has a
    /// non-finite coordinate.
    pub fn new(start: Point3, goal: Point3, zones: Vec<NoFlyZone>) -> Result<Self> {
        let config = Self {
            start,
            goal,
            point_dim: 3,
            zones,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration from zones in `[x, y, height, radius]` layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidZone`] naming the first bad zone, or any
    /// error of [`UavConfig::new`].
    pub fn from_zone_arrays(start: Point3, goal: Point3, zones: &[[f64; 4]]) -> Result<Self> {
        let zones = zones
            .iter()
            .enumerate()
            .map(|(index, &[x, y, height, radius])| {
                NoFlyZone::checked(x, y, height, radius)
                    .map_err(|source| ConfigError::InvalidZone { index, source })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::new(start, goal, zones)
    }

    /// Sets the waypoint dimensionality.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedPointDim`] for anything but 3.
    pub fn with_point_dim(mut self, point_dim: usize) -> Result<Self> {
        self.point_dim = point_dim;
        self.validate()?;
        Ok(self)
    }

    /// Checks endpoint finiteness and the waypoint dimensionality.
    ///
    /// Zones validate themselves on construction.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        if self.point_dim != 3 {
            return Err(ConfigError::UnsupportedPointDim(self.point_dim).into());
        }
        if !self.start.coords.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFiniteEndpoint("start").into());
        }
        if !self.goal.coords.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFiniteEndpoint("goal").into());
        }
        Ok(())
    }

    /// Fixed start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Fixed goal point.
    #[must_use]
    pub fn goal(&self) -> &Point3 {
        &self.goal
    }

    /// Number of reals per waypoint in a candidate vector.
    #[must_use]
    pub fn point_dim(&self) -> usize {
        self.point_dim
    }

    /// The no-fly zones, in configuration order.
    #[must_use]
    pub fn zones(&self) -> &[NoFlyZone] {
        &self.zones
    }
}
