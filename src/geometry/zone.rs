use crate::error::{Result, ZoneError};
use crate::math::Point2;

/// A static no-fly zone: an upright circular cylinder standing on the ground.
///
/// The zone occupies every point whose planar distance to `center` is at most
/// `radius` and whose altitude lies in `[0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ZoneRepr", into = "ZoneRepr")
)]
pub struct NoFlyZone {
    center: Point2,
    height: f64,
    radius: f64,
}

impl NoFlyZone {
    /// Creates a new zone with base center `(x, y, 0)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is not finite, the radius is not
    /// positive, or the height is negative.
    pub fn new(x: f64, y: f64, height: f64, radius: f64) -> Result<Self> {
        Ok(Self::checked(x, y, height, radius)?)
    }

    pub(crate) fn checked(
        x: f64,
        y: f64,
        height: f64,
        radius: f64,
    ) -> std::result::Result<Self, ZoneError> {
        if !(x.is_finite() && y.is_finite() && height.is_finite() && radius.is_finite()) {
            return Err(ZoneError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(ZoneError::InvalidRadius(radius));
        }
        if height < 0.0 {
            return Err(ZoneError::InvalidHeight(height));
        }
        Ok(Self {
            center: Point2::new(x, y),
            height,
            radius,
        })
    }

    /// Creates a zone from the `[x, y, height, radius]` layout.
    ///
    /// # Errors
    ///
    /// Same as [`NoFlyZone::new`].
    pub fn from_array([x, y, height, radius]: [f64; 4]) -> Result<Self> {
        Self::new(x, y, height, radius)
    }

    /// Returns the planar center of the zone's base.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the top altitude of the zone.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the zone in `[x, y, height, radius]` layout.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.center.x, self.center.y, self.height, self.radius]
    }
}

/// Accepted serialized forms of a zone: a compact array or named fields.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ZoneRepr {
    Array([f64; 4]),
    Fields {
        x: f64,
        y: f64,
        height: f64,
        radius: f64,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<ZoneRepr> for NoFlyZone {
    type Error = ZoneError;

    fn try_from(repr: ZoneRepr) -> std::result::Result<Self, Self::Error> {
        let [x, y, height, radius] = match repr {
            ZoneRepr::Array(a) => a,
            ZoneRepr::Fields {
                x,
                y,
                height,
                radius,
            } => [x, y, height, radius],
        };
        Self::checked(x, y, height, radius)
    }
}

#[cfg(feature = "serde")]
impl From<NoFlyZone> for ZoneRepr {
    fn from(zone: NoFlyZone) -> Self {
        Self::Fields {
            x: zone.center.x,
            y: zone.center.y,
            height: zone.height,
            radius: zone.radius,
        }
    }
}
