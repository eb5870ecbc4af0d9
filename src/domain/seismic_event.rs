use crate::domain::Hypocenter;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct SeismicEvent {
    pub name: Option<String>,
    pub origin_time: Option<DateTime<Utc>>,
    pub hypocenter: Hypocenter,
}

impl SeismicEvent {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed event")
    }
}
