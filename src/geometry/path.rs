use crate::error::{ConfigError, Result, ShapeError};
use crate::math::Point3;

/// An ordered flight path: start, interior waypoints, goal.
///
/// Always holds at least two points. Built fresh for each evaluation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point3>,
}

impl Path {
    /// Assembles a path from a fixed start, a flat waypoint vector and a fixed goal.
    ///
    /// `waypoints` is read in consecutive groups of `point_dim` reals.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedPointDim`] unless `point_dim` is 3,
    /// [`ShapeError::NotDivisible`] if `waypoints.len()` is not a multiple of
    /// `point_dim`, and [`ShapeError::NonFinite`] if a coordinate is NaN or
    /// infinite.
    pub fn assemble(
        start: Point3,
        waypoints: &[f64],
        goal: Point3,
        point_dim: usize,
    ) -> Result<Self> {
        if point_dim != 3 {
            return Err(ConfigError::UnsupportedPointDim(point_dim).into());
        }
        if waypoints.len() % point_dim != 0 {
            return Err(ShapeError::NotDivisible {
                len: waypoints.len(),
                point_dim,
            }
            .into());
        }
        if let Some((index, &value)) = waypoints.iter().enumerate().find(|(_, v)| !v.is_finite())
        {
            return Err(ShapeError::NonFinite { index, value }.into());
        }

        let mut points = Vec::with_capacity(waypoints.len() / point_dim + 2);
        points.push(start);
        points.extend(
            waypoints
                .chunks_exact(point_dim)
                .map(|c| Point3::new(c[0], c[1], c[2])),
        );
        points.push(goal);
        Ok(Self { points })
    }

    /// Creates a path from explicit points.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::TooFewPoints`] if fewer than two points are given.
    pub fn from_points(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 2 {
            return Err(ShapeError::TooFewPoints { len: points.len() }.into());
        }
        Ok(Self { points })
    }

    /// All points, start and goal included.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// The start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.points[0]
    }

    /// The goal point.
    #[must_use]
    pub fn goal(&self) -> &Point3 {
        &self.points[self.points.len() - 1]
    }

    /// Interior waypoints (everything between start and goal).
    #[must_use]
    pub fn waypoints(&self) -> &[Point3] {
        &self.points[1..self.points.len() - 1]
    }

    /// Iterates over consecutive `(from, to)` segments.
    pub fn segments(&self) -> impl Iterator<Item = (&Point3, &Point3)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Number of segments (`points - 1`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Sum of Euclidean distances between consecutive points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    /// Flattens the interior waypoints back into `[x0, y0, z0, x1, ...]`.
    ///
    /// Inverse of the reshape done by [`Path::assemble`].
    #[must_use]
    pub fn flatten_waypoints(&self) -> Vec<f64> {
        self.waypoints()
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }
}
