use crate::geometry::NoFlyZone;
use crate::math::distance_2d::planar_distance;
use crate::math::{Point3, SAFETY_MARGIN};

/// Result of a point containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneContainment {
    /// Whether the point lies inside the margin-widened zone.
    pub inside: bool,
    /// Planar distance from the point to the zone axis, computed even when outside.
    pub distance_xy: f64,
}

/// Tests whether a point lies inside a no-fly zone widened by [`SAFETY_MARGIN`].
///
/// A point is inside iff `distance_xy <= radius + SAFETY_MARGIN` and
/// `0 <= z <= height`. Both bounds are inclusive.
pub struct PointInZone<'a> {
    point: &'a Point3,
    zone: &'a NoFlyZone,
}

impl<'a> PointInZone<'a> {
    /// Creates a new `PointInZone` query.
    #[must_use]
    pub fn new(point: &'a Point3, zone: &'a NoFlyZone) -> Self {
        Self { point, zone }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> ZoneContainment {
        let distance_xy = planar_distance(self.point, self.zone.center());
        let within_radius = distance_xy <= self.zone.radius() + SAFETY_MARGIN;
        let within_height = (0.0..=self.zone.height()).contains(&self.point.z);
        ZoneContainment {
            inside: within_radius && within_height,
            distance_xy,
        }
    }
}
