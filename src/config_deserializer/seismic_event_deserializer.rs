use crate::domain::{GeoPoint, Hypocenter, SeismicEvent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

// Coordinates are not range-checked here, `strict` decides whether they are rejected
impl<'de> Deserialize<'de> for SeismicEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(default)]
            name: Option<String>,
            #[serde(default)]
            origin_time: Option<DateTime<Utc>>,
            latitude: f64,
            longitude: f64,
            depth_km: f64,
        }

        let inner = Inner::deserialize(deserializer)?;

        Ok(SeismicEvent {
            name: inner.name,
            origin_time: inner.origin_time,
            hypocenter: Hypocenter::new(GeoPoint::new(inner.latitude, inner.longitude), inner.depth_km),
        })
    }
}
