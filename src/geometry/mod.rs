mod path;
mod zone;

pub use path::Path;
pub use zone::NoFlyZone;
