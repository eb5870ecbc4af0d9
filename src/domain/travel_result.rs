use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TravelResult {
    pub distance_km: f64,
    pub p_time_s: f64,
    pub s_time_s: f64,
}

/// Absolute arrival instants of both phases at a station.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Arrivals {
    pub p: DateTime<Utc>,
    pub s: DateTime<Utc>,
}

impl TravelResult {
    pub fn new(distance_km: f64, p_time_s: f64, s_time_s: f64) -> Self {
        TravelResult {
            distance_km,
            p_time_s,
            s_time_s,
        }
    }

    /// Warning window between the P-wave detection and the arrival of the S-wave.
    pub fn lead_time(&self) -> f64 {
        self.s_time_s - self.p_time_s
    }

    /// Arrival instants for an event that ruptured at `origin`, rounded to the millisecond.
    ///
    /// Returns `None` when a travel time is not finite or the instant is out of range.
    pub fn arrivals(&self, origin: DateTime<Utc>) -> Option<Arrivals> {
        Some(Arrivals {
            p: origin.checked_add_signed(to_time_delta(self.p_time_s)?)?,
            s: origin.checked_add_signed(to_time_delta(self.s_time_s)?)?,
        })
    }
}

fn to_time_delta(seconds: f64) -> Option<TimeDelta> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}
