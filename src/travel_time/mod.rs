mod calculator;
mod haversine;

pub use calculator::{calculate, calculate_distance_and_pwave_time, calculate_strict};
pub use haversine::surface_distance;
