use crate::domain::{Station, TravelResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Display;

/// What a single station gets to know about an event.
#[derive(Debug, Serialize)]
pub struct StationReport<'a> {
    station: &'a str,
    distance_km: f64,
    p_time_s: f64,
    s_time_s: f64,
    lead_time_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    p_arrival: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s_arrival: Option<DateTime<Utc>>,
}

impl<'a> StationReport<'a> {
    pub fn new(station: &'a Station, result: &TravelResult, origin_time: Option<DateTime<Utc>>) -> Self {
        let arrivals = origin_time.and_then(|origin| result.arrivals(origin));
        StationReport {
            station: station.name.as_str(),
            distance_km: result.distance_km,
            p_time_s: result.p_time_s,
            s_time_s: result.s_time_s,
            lead_time_s: result.lead_time(),
            p_arrival: arrivals.map(|a| a.p),
            s_arrival: arrivals.map(|a| a.s),
        }
    }
}

impl Display for StationReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Station: {}", self.station)?;
        writeln!(f, "Distance: {:.2} km", self.distance_km)?;
        writeln!(f, "P-wave Travel Time: {:.2} seconds", self.p_time_s)?;
        writeln!(f, "S-wave Travel Time: {:.2} seconds", self.s_time_s)?;
        write!(f, "EEW Response Time: {:.2} seconds", self.lead_time_s)?;
        if let (Some(p), Some(s)) = (self.p_arrival, self.s_arrival) {
            writeln!(f)?;
            writeln!(f, "P-wave Arrival: {}", p.to_rfc3339_opts(SecondsFormat::Millis, true))?;
            write!(f, "S-wave Arrival: {}", s.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        }
        Ok(())
    }
}
