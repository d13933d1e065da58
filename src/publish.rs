use thiserror::Error;

use crate::interfaces::twitter::{TwitterClient, TwitterError};
use crate::readings::Reading;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("could not read last status: {0}")]
    LastStatus(#[source] TwitterError),
    #[error("could not post status: {0}")]
    Post(#[source] TwitterError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    Published,
    Duplicate,
}

/// The social-media account statuses are published to.
pub trait StatusService {
    fn last_status_text(&self) -> Result<Option<String>, TwitterError>;
    fn post_status(&self, text: &str, place_id: Option<&str>) -> Result<(), TwitterError>;
}

impl StatusService for TwitterClient {
    fn last_status_text(&self) -> Result<Option<String>, TwitterError> {
        self.last_tweet_text()
    }

    fn post_status(&self, text: &str, place_id: Option<&str>) -> Result<(), TwitterError> {
        self.update_status(text, place_id)
    }
}

pub fn compose_status(reading: &Reading) -> String {
    format!(
        "AQI: {}. The dominant pollutant is {}. ({}.)",
        reading.aqi, reading.dominant_pollutant, reading.category
    )
}

pub struct Publisher<S> {
    service: S,
    place_id: Option<String>,
}

impl<S: StatusService> Publisher<S> {
    pub fn new(service: S, place_id: Option<String>) -> Self {
        Publisher { service, place_id }
    }

    /// Post the status for `reading` unless it is identical to the last one posted.
    pub fn publish(&self, reading: &Reading) -> Result<PublishOutcome, PublishError> {
        let status = compose_status(reading);

        let last = self
            .service
            .last_status_text()
            .map_err(PublishError::LastStatus)?;
        if last.as_deref() == Some(status.as_str()) {
            log::info!("Status \"{}\" is a duplicate", status);
            return Ok(PublishOutcome::Duplicate);
        }

        log::info!("[{}]: {}", reading.local_time, status);
        self.service
            .post_status(&status, self.place_id.as_deref())
            .map_err(PublishError::Post)?;
        Ok(PublishOutcome::Published)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
