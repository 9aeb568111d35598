use crate::geometry::{NoFlyZone, Path};
use crate::operations::query::PointInZone;

/// Sampling penalty: sums the planar axis distance of every path point that
/// falls inside a (margin-widened) zone.
///
/// Only path vertices are sampled; segment interiors are not inspected. A point
/// inside several overlapping zones contributes once per zone.
pub struct SumPenetrationDistance<'a> {
    path: &'a Path,
    zones: &'a [NoFlyZone],
}

impl<'a> SumPenetrationDistance<'a> {
    /// Creates a new penalty computation.
    #[must_use]
    pub fn new(path: &'a Path, zones: &'a [NoFlyZone]) -> Self {
        Self { path, zones }
    }

    /// Executes the computation, returning the accumulated penalty.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let mut total = 0.0;
        for (point_index, point) in self.path.points().iter().enumerate() {
            for (zone_index, zone) in self.zones.iter().enumerate() {
                let containment = PointInZone::new(point, zone).execute();
                if containment.inside {
                    tracing::trace!(
                        point_index,
                        zone_index,
                        distance_xy = containment.distance_xy,
                        "path point inside no-fly zone"
                    );
                    total += containment.distance_xy;
                }
            }
        }
        total
    }
}
