use crate::domain::VelocityModel;
use crate::domain::velocity_model::{DEFAULT_VP_KM_S, DEFAULT_VS_KM_S, EARTH_RADIUS_KM};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for VelocityModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(default = "default_vp")]
            vp_km_s: f64,
            #[serde(default = "default_vs")]
            vs_km_s: f64,
            #[serde(default = "default_earth_radius")]
            earth_radius_km: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        VelocityModel::try_new(inner.vp_km_s, inner.vs_km_s, inner.earth_radius_km).map_err(Error::custom)
    }
}

fn default_vp() -> f64 {
    DEFAULT_VP_KM_S
}

fn default_vs() -> f64 {
    DEFAULT_VS_KM_S
}

fn default_earth_radius() -> f64 {
    EARTH_RADIUS_KM
}
