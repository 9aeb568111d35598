use crate::geometry::{NoFlyZone, Path};
use crate::operations::query::SegmentIntersectsCylinder;

/// A path segment that intersects a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCollision {
    /// Index of the segment (`points[segment] -> points[segment + 1]`).
    pub segment: usize,
    /// Index of the first zone, in configuration order, that the segment hits.
    pub zone: usize,
}

/// Exact collision diagnostics over every segment of a path.
///
/// Each segment is reported at most once, against the first zone it hits,
/// no matter how many zones it actually crosses.
pub struct CountSegmentCollisions<'a> {
    path: &'a Path,
    zones: &'a [NoFlyZone],
}

impl<'a> CountSegmentCollisions<'a> {
    /// Creates a new collision count.
    #[must_use]
    pub fn new(path: &'a Path, zones: &'a [NoFlyZone]) -> Self {
        Self { path, zones }
    }

    /// Executes the count, returning the number of colliding segments.
    #[must_use]
    pub fn execute(&self) -> usize {
        self.collisions().count()
    }

    /// Lists the colliding segments in path order.
    #[must_use]
    pub fn colliding_segments(&self) -> Vec<SegmentCollision> {
        self.collisions().collect()
    }

    /// Returns `true` if no segment touches any zone.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.collisions().next().is_none()
    }

    fn collisions(&self) -> impl Iterator<Item = SegmentCollision> + '_ {
        let zones = self.zones;
        self.path
            .segments()
            .enumerate()
            .filter_map(move |(segment, (start, end))| {
                zones
                    .iter()
                    .position(|zone| SegmentIntersectsCylinder::new(start, end, zone).execute())
                    .map(|zone| SegmentCollision { segment, zone })
            })
    }
}
