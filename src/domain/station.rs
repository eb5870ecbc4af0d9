use crate::domain::{GeoPoint, ValidationError};

#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub name: String,
    pub location: GeoPoint,
    pub elevation_km: f64, // Above sea level
}

impl Station {
    pub fn new(name: impl Into<String>, location: GeoPoint, elevation_km: f64) -> Self {
        Station {
            name: name.into(),
            location,
            elevation_km,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.location.validate()?;
        if !self.elevation_km.is_finite() {
            return Err(ValidationError::InvalidElevation(self.elevation_km));
        }
        Ok(())
    }
}
