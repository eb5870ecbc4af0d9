use crate::domain::{GeoPoint, ValidationError};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Hypocenter {
    pub location: GeoPoint,
    pub depth_km: f64, // Below the surface
}

impl Hypocenter {
    pub fn new(location: GeoPoint, depth_km: f64) -> Self {
        Hypocenter { location, depth_km }
    }

    /// Height relative to the surface, negative for any hypocenter below it.
    pub fn elevation_km(&self) -> f64 {
        -self.depth_km
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.location.validate()?;
        if !(self.depth_km.is_finite() && self.depth_km >= 0.0) {
            return Err(ValidationError::InvalidDepth(self.depth_km));
        }
        Ok(())
    }
}
