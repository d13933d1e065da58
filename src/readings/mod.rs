use serde_json::Value;
use thiserror::Error;

use crate::interfaces::aqicn::{AqicnClient, AqicnError};

pub mod models;
mod parse;

pub use models::{Category, Pollutant, Reading};
pub use parse::{dominant_pollutant, max_sub_index, parse_feed};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] AqicnError),
    #[error("could not parse AQICN response: {source}")]
    MalformedJson {
        source: serde_json::Error,
        body: String,
    },
    #[error("AQICN status not ok: {0}")]
    Envelope(String),
    #[error("invalid AQI value: {0}")]
    InvalidAqi(Value),
    #[error("invalid observation time: {0}")]
    InvalidTime(i64),
    #[error("no dominant pollutant")]
    NoDominantPollutant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connectivity or garbled responses; expected to clear up on its own
    Transient,
    /// The provider answered but the reading itself is unusable
    Data,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Request(_) | FetchError::MalformedJson { .. } => FetchErrorKind::Transient,
            FetchError::Envelope(_)
            | FetchError::InvalidAqi(_)
            | FetchError::InvalidTime(_)
            | FetchError::NoDominantPollutant => FetchErrorKind::Data,
        }
    }
}

/// Anything that can produce the current reading for the configured station.
pub trait ReadingSource {
    fn fetch(&self) -> Result<Reading, FetchError>;
}

impl ReadingSource for AqicnClient {
    fn fetch(&self) -> Result<Reading, FetchError> {
        let body = self.get_feed()?;
        log::trace!("AQICN response: {}", body);
        parse_feed(&body)
    }
}
