mod geo_point;
mod hypocenter;
mod seismic_event;
mod station;
mod travel_result;
pub mod validation_error;
pub mod velocity_model;

pub use geo_point::GeoPoint;
pub use hypocenter::Hypocenter;
pub use seismic_event::SeismicEvent;
pub use station::Station;
pub use travel_result::{Arrivals, TravelResult};
pub use validation_error::ValidationError;
pub use velocity_model::VelocityModel;
