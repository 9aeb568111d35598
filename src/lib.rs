pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use config::UavConfig;
pub use error::{ConfigError, NoflyError, Result, ShapeError, ZoneError};
pub use geometry::{NoFlyZone, Path};
