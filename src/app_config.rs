use crate::domain::{SeismicEvent, Station, TravelResult, ValidationError, VelocityModel};
use crate::travel_time;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    model: VelocityModel,
    #[serde(default)]
    strict: bool,
    #[serde(default)]
    output: OutputFormat,
    event: SeismicEvent,
    #[serde(default)]
    stations: Vec<Station>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config").required(false))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(
                    config::Environment::with_prefix("SEISMOTIME")
                        .prefix_separator("_")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    pub fn from_toml(toml: &str) -> Result<Self, AppConfigError> {
        Self::build(Config::builder().add_source(config::File::from_str(toml, config::FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        if config.stations.is_empty() {
            return Err(AppConfigError::NoStations);
        }
        Ok(config)
    }

    pub fn model(&self) -> &VelocityModel {
        &self.model
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn event(&self) -> &SeismicEvent {
        &self.event
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Travel result of the configured event at `station`, rejecting out-of-range input in strict mode.
    pub fn calculate(&self, station: &Station) -> Result<TravelResult, ValidationError> {
        if self.strict {
            travel_time::calculate_strict(&self.event.hypocenter, station, &self.model)
        } else {
            Ok(travel_time::calculate(&self.event.hypocenter, station, &self.model))
        }
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("no stations configured")]
    NoStations,
}
