use crate::domain::ValidationError;
use crate::domain::validation_error::Wave;

pub const DEFAULT_VP_KM_S: f64 = 5.8;
pub const DEFAULT_VS_KM_S: f64 = 3.48;
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Constant wave velocities on a spherical Earth.
///
/// The defaults describe the shallow crust of the Balkan region, where most hypocenters lie in the 0 to 15 km
/// range. Substitute a regional model with [`VelocityModel::try_new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityModel {
    vp_km_s: f64,
    vs_km_s: f64,
    earth_radius_km: f64,
}

impl VelocityModel {
    /// Builds a model without checking its values.
    pub fn new(vp_km_s: f64, vs_km_s: f64, earth_radius_km: f64) -> Self {
        VelocityModel {
            vp_km_s,
            vs_km_s,
            earth_radius_km,
        }
    }

    pub fn try_new(vp_km_s: f64, vs_km_s: f64, earth_radius_km: f64) -> Result<Self, ValidationError> {
        let model = VelocityModel::new(vp_km_s, vs_km_s, earth_radius_km);
        model.validate()?;
        Ok(model)
    }

    pub fn vp_km_s(&self) -> f64 {
        self.vp_km_s
    }

    pub fn vs_km_s(&self) -> f64 {
        self.vs_km_s
    }

    pub fn earth_radius_km(&self) -> f64 {
        self.earth_radius_km
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.vp_km_s.is_finite() && self.vp_km_s > 0.0) {
            return Err(ValidationError::InvalidVelocity {
                wave: Wave::P,
                value: self.vp_km_s,
            });
        }

        if !(self.vs_km_s.is_finite() && self.vs_km_s > 0.0) {
            return Err(ValidationError::InvalidVelocity {
                wave: Wave::S,
                value: self.vs_km_s,
            });
        }

        if self.vp_km_s <= self.vs_km_s {
            return Err(ValidationError::VelocityOrdering {
                vp: self.vp_km_s,
                vs: self.vs_km_s,
            });
        }

        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(ValidationError::InvalidEarthRadius(self.earth_radius_km));
        }

        Ok(())
    }
}

impl Default for VelocityModel {
    fn default() -> Self {
        VelocityModel::new(DEFAULT_VP_KM_S, DEFAULT_VS_KM_S, EARTH_RADIUS_KM)
    }
}
