pub mod distance_2d;

/// 2D point type (ground-plane projection).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Extra radius added to a zone when testing point containment.
///
/// Only the sampling penalty uses it; the exact segment test does not.
pub const SAFETY_MARGIN: f64 = 0.2;

/// Tolerance for the degenerate-projection check and the lateral hit height band.
pub const EPSILON: f64 = 1e-6;

/// Weight applied to total path length in the fitness.
pub const DISTANCE_WEIGHT: f64 = 0.2;

/// Weight applied to the collision penalty in the fitness.
pub const PENALTY_WEIGHT: f64 = 100.0;
