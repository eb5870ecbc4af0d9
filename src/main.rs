use seismotime::app_config::{AppConfig, OutputFormat};
use seismotime::report::StationReport;
use tracing::{debug, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");
    debug!("Using velocity model {:?}", config.model());

    let event = config.event();
    info!(
        "🌍 {} at {}, {}, {} km deep",
        event.display_name(),
        event.hypocenter.location.latitude,
        event.hypocenter.location.longitude,
        event.hypocenter.depth_km
    );

    for station in config.stations() {
        let result = config.calculate(station)?;
        debug!("{}: {:?}", station.name, result);

        let report = StationReport::new(station, &result, event.origin_time);
        match config.output() {
            OutputFormat::Text => println!("{}", report),
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }
    }

    info!("✅  Reported {} station(s)", config.stations().len());
    Ok(())
}
