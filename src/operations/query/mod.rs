mod point_in_zone;
mod segment_cylinder;

pub use point_in_zone::{PointInZone, ZoneContainment};
pub use segment_cylinder::{CylinderHit, SegmentIntersectsCylinder};
