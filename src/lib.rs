//! Hypocentral distance and constant-velocity P/S travel times for earthquake early warning.

pub mod app_config;
mod config_deserializer;
pub mod domain;
pub mod report;
pub mod travel_time;
