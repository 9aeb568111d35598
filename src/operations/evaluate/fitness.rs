use crate::config::UavConfig;
use crate::error::Result;
use crate::geometry::Path;
use crate::math::{DISTANCE_WEIGHT, PENALTY_WEIGHT};
use crate::operations::collision::SumPenetrationDistance;

/// The two fitness terms and their weighted combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessBreakdown {
    /// Sum of Euclidean segment lengths.
    pub total_distance: f64,
    /// Sampling penalty from [`SumPenetrationDistance`].
    pub collision_penalty: f64,
    /// `DISTANCE_WEIGHT * total_distance + PENALTY_WEIGHT * collision_penalty`.
    pub fitness: f64,
}

impl FitnessBreakdown {
    /// Combines the two terms with the fixed weights.
    #[must_use]
    pub fn combine(total_distance: f64, collision_penalty: f64) -> Self {
        Self {
            total_distance,
            collision_penalty,
            fitness: DISTANCE_WEIGHT * total_distance + PENALTY_WEIGHT * collision_penalty,
        }
    }
}

/// Scores a candidate waypoint vector for the optimizer. Lower is better.
///
/// The path is `start`, the candidate reshaped into waypoints, then `goal`.
/// Zone violations dominate through [`PENALTY_WEIGHT`]; among clear paths
/// the shorter one wins.
///
/// # Example
///
/// ```
/// use nofly::UavConfig;
/// use nofly::math::Point3;
/// use nofly::operations::evaluate::Evaluate;
///
/// let config = UavConfig::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0), vec![])?;
/// let fitness = Evaluate::new(&[0.0, 0.0, 0.0], &config).execute()?;
/// assert!((fitness - 2.0).abs() < 1e-12);
/// # Ok::<(), nofly::NoflyError>(())
/// ```
pub struct Evaluate<'a> {
    candidate: &'a [f64],
    config: &'a UavConfig,
}

impl<'a> Evaluate<'a> {
    /// Creates a new evaluation of `candidate` under `config`.
    #[must_use]
    pub fn new(candidate: &'a [f64], config: &'a UavConfig) -> Self {
        Self { candidate, config }
    }

    /// Executes the evaluation, returning the fitness scalar.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`](crate::ShapeError) if the candidate cannot be
    /// reshaped into waypoints, or a [`ConfigError`](crate::ConfigError) if
    /// the configuration is invalid.
    pub fn execute(&self) -> Result<f64> {
        Ok(self.breakdown()?.fitness)
    }

    /// Executes the evaluation, returning both terms alongside the fitness.
    ///
    /// # Errors
    ///
    /// Same as [`Evaluate::execute`].
    pub fn breakdown(&self) -> Result<FitnessBreakdown> {
        let path = self.path().inspect_err(|err| {
            tracing::warn!(len = self.candidate.len(), %err, "rejected candidate");
        })?;

        let total_distance = path.length();
        let collision_penalty = SumPenetrationDistance::new(&path, self.config.zones()).execute();
        let result = FitnessBreakdown::combine(total_distance, collision_penalty);

        tracing::debug!(
            waypoints = path.waypoints().len(),
            total_distance,
            collision_penalty,
            fitness = result.fitness,
            "evaluated candidate"
        );
        Ok(result)
    }

    /// Builds the full path without scoring it.
    ///
    /// # Errors
    ///
    /// Same as [`Evaluate::execute`].
    pub fn path(&self) -> Result<Path> {
        // Deserialized configs bypass the constructor checks.
        self.config.validate()?;
        Path::assemble(
            *self.config.start(),
            self.candidate,
            *self.config.goal(),
            self.config.point_dim(),
        )
    }
}
