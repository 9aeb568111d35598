use thiserror::Error;

/// Top-level error type for the nofly evaluator.
#[derive(Debug, Error)]
pub enum NoflyError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to the shape of a candidate vector or path.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("candidate length {len} is not divisible by point dimension {point_dim}")]
    NotDivisible { len: usize, point_dim: usize },

    #[error("candidate coordinate {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("a path needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },
}

/// Errors related to a single no-fly zone definition.
#[derive(Debug, Error, PartialEq)]
pub enum ZoneError {
    #[error("radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("height must be non-negative, got {0}")]
    InvalidHeight(f64),

    #[error("zone parameters must be finite")]
    NonFinite,
}

/// Errors related to UAV configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("zone {index}: {source}")]
    InvalidZone {
        index: usize,
        #[source]
        source: ZoneError,
    },

    #[error("unsupported point dimension {0}, only 3 is supported")]
    UnsupportedPointDim(usize),

    #[error("{0} point must have finite coordinates")]
    NonFiniteEndpoint(&'static str),
}

/// Convenience type alias for results using [`NoflyError`].
pub type Result<T> = std::result::Result<T, NoflyError>;
