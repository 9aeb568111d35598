use super::{Point2, Point3, Vector2, Vector3};

/// Projects a 3D point onto the ground plane, dropping `z`.
#[must_use]
pub fn project_xy(point: &Point3) -> Point2 {
    Point2::new(point.x, point.y)
}

/// Projects a 3D vector onto the ground plane, dropping `z`.
#[must_use]
pub fn project_vec_xy(v: &Vector3) -> Vector2 {
    Vector2::new(v.x, v.y)
}

/// Returns the distance between `point` and `center` measured in the xy plane.
#[must_use]
pub fn planar_distance(point: &Point3, center: &Point2) -> f64 {
    (project_xy(point) - center).norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn planar_distance_ignores_height() {
        let c = Point2::new(0.0, 0.0);
        let low = planar_distance(&Point3::new(3.0, 4.0, 0.0), &c);
        let high = planar_distance(&Point3::new(3.0, 4.0, 250.0), &c);
        assert!((low - 5.0).abs() < TOL, "low={low}");
        assert!((high - 5.0).abs() < TOL, "high={high}");
    }

    #[test]
    fn planar_distance_offset_center() {
        // (4, 6) to (1, 2): dx = 3, dy = 4.
        let d = planar_distance(&Point3::new(4.0, 6.0, -1.0), &Point2::new(1.0, 2.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn projection_drops_z() {
        let v = project_vec_xy(&Vector3::new(1.0, -2.0, 9.0));
        assert_eq!(v, Vector2::new(1.0, -2.0));
        let p = project_xy(&Point3::new(1.5, 2.5, 3.5));
        assert_eq!(p, Point2::new(1.5, 2.5));
    }
}
