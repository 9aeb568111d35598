mod segment_collisions;
mod sum_penetration;

pub use segment_collisions::{CountSegmentCollisions, SegmentCollision};
pub use sum_penetration::SumPenetrationDistance;
