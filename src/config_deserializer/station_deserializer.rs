use crate::domain::{GeoPoint, Station};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Station {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            name: String,
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            elevation_km: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        Ok(Station::new(inner.name, GeoPoint::new(inner.latitude, inner.longitude), inner.elevation_km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_a_station() {
        let json = json!({ "name": "Zagreb", "latitude": 45.827084, "longitude": 15.98687, "elevation_km": 0.179 });

        let station = serde_json::from_value::<Station>(json).unwrap();

        assert_eq!(station, Station::new("Zagreb", GeoPoint::new(45.827084, 15.98687), 0.179));
    }

    #[test]
    fn elevation_defaults_to_sea_level() {
        let json = json!({ "name": "Split", "latitude": 43.5, "longitude": 16.44 });

        let station = serde_json::from_value::<Station>(json).unwrap();

        assert_eq!(station.elevation_km, 0.0);
    }

    #[test]
    fn keeps_an_out_of_range_location() {
        let json = json!({ "name": "Nowhere", "latitude": 45.0, "longitude": 200.0 });

        let station = serde_json::from_value::<Station>(json).unwrap();

        assert_eq!(station.location, GeoPoint::new(45.0, 200.0));
    }

    #[test]
    fn fails_without_a_name() {
        let json = json!({ "latitude": 45.0, "longitude": 16.0 });
        assert!(serde_json::from_value::<Station>(json).is_err());
    }
}
