use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wave {
    P,
    S,
}

impl Display for Wave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Wave::P => write!(f, "P-wave"),
            Wave::S => write!(f, "S-wave"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("invalid hypocenter depth: {0} km, must be a finite non-negative number")]
    InvalidDepth(f64),
    #[error("invalid station elevation: {0} km, must be a finite number")]
    InvalidElevation(f64),
    #[error("invalid {wave} velocity: {value} km/s, must be a finite positive number")]
    InvalidVelocity { wave: Wave, value: f64 },
    #[error("P-wave velocity {vp} km/s must exceed S-wave velocity {vs} km/s")]
    VelocityOrdering { vp: f64, vs: f64 },
    #[error("invalid earth radius: {0} km, must be a finite positive number")]
    InvalidEarthRadius(f64),
}
