use crate::geometry::NoFlyZone;
use crate::math::distance_2d::{planar_distance, project_vec_xy};
use crate::math::{Point3, EPSILON};

/// Where a segment first met a zone, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderHit {
    /// Segment is vertical in the xy plane, inside the radius, and its
    /// z-range overlaps `[0, height]`.
    Vertical,
    /// Segment crosses the lateral surface within the height band.
    Lateral,
    /// Segment crosses the bottom disc (`z = 0`).
    BottomCap,
    /// Segment crosses the top disc (`z = height`).
    TopCap,
}

/// Exact test of a line segment against a no-fly zone cylinder.
///
/// Unlike [`PointInZone`](super::PointInZone), no safety margin is applied:
/// the zone radius is used as is.
pub struct SegmentIntersectsCylinder<'a> {
    start: &'a Point3,
    end: &'a Point3,
    zone: &'a NoFlyZone,
}

impl<'a> SegmentIntersectsCylinder<'a> {
    /// Creates a new intersection query for the segment `start -> end`.
    #[must_use]
    pub fn new(start: &'a Point3, end: &'a Point3, zone: &'a NoFlyZone) -> Self {
        Self { start, end, zone }
    }

    /// Returns `true` if the segment touches the cylinder.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.classify().is_some()
    }

    /// Returns the first matching hit kind, or `None` for no intersection.
    ///
    /// Solves `|f + t d|^2 = r^2` in the xy plane for `t` in `[0, 1]`, then
    /// bounds the hit by height. The lateral surface is checked before the caps.
    #[must_use]
    pub fn classify(&self) -> Option<CylinderHit> {
        let start = self.start;
        let end = self.end;
        let center = self.zone.center();
        let radius = self.zone.radius();
        let height = self.zone.height();

        let d = end - start;
        let f = start - Point3::new(center.x, center.y, 0.0);
        let d_xy = project_vec_xy(&d);
        let f_xy = project_vec_xy(&f);

        let a = d_xy.dot(&d_xy);
        let b = 2.0 * f_xy.dot(&d_xy);
        let c = f_xy.dot(&f_xy) - radius * radius;

        if a.abs() < EPSILON {
            // No planar motion: the whole segment shares one (x, y).
            if c > 0.0 {
                return None;
            }
            let z_min = start.z.min(end.z);
            let z_max = start.z.max(end.z);
            return (z_min <= height && z_max >= 0.0).then_some(CylinderHit::Vertical);
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let roots = [(-b + sqrt_disc) / (2.0 * a), (-b - sqrt_disc) / (2.0 * a)];
        let unit = 0.0..=1.0;
        if !roots.iter().any(|t| unit.contains(t)) {
            return None;
        }

        let band = -EPSILON..=height + EPSILON;
        let lateral = roots
            .iter()
            .filter(|t| unit.contains(*t))
            .map(|t| start.z + t * d.z)
            .any(|z| band.contains(&z));
        if lateral {
            return Some(CylinderHit::Lateral);
        }

        if d.z != 0.0 {
            let caps = [
                (-start.z / d.z, CylinderHit::BottomCap),
                ((height - start.z) / d.z, CylinderHit::TopCap),
            ];
            for (t, hit) in caps {
                if unit.contains(&t) && planar_distance(&(start + d * t), center) <= radius {
                    return Some(hit);
                }
            }
        }

        None
    }
}
