use crate::domain::ValidationError;

/// Horizontal position in degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Returns `(latitude, longitude)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.latitude >= -90.0 && self.latitude <= 90.0) {
            return Err(ValidationError::InvalidLatitude(self.latitude));
        }

        if !(self.longitude >= -180.0 && self.longitude <= 180.0) {
            return Err(ValidationError::InvalidLongitude(self.longitude));
        }

        Ok(())
    }
}
