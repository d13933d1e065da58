use std::time::Duration;

use thiserror::Error;

use crate::config::PollConfig;
use crate::helpers::{backoff_retry, Sleeper};
use crate::publish::{PublishOutcome, Publisher, StatusService};
use crate::readings::{FetchError, FetchErrorKind, Reading, ReadingSource};

#[derive(Error, Debug)]
pub enum PollError {
    #[error("giving up on fetching readings: {0}")]
    FetchRetriesExhausted(#[source] FetchError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Published,
    Duplicate,
    PublishFailed,
    /// Observation time did not advance; nothing was sent
    Unchanged,
}

/// Polls the reading source and publishes each reading whose observation time
/// has moved on since the last one handled.
pub struct Poller<R, S, Z> {
    source: R,
    publisher: Publisher<S>,
    sleeper: Z,
    config: PollConfig,
    previous: Option<Reading>,
}

impl<R, S, Z> Poller<R, S, Z>
where
    R: ReadingSource,
    S: StatusService,
    Z: Sleeper,
{
    pub fn new(source: R, publisher: Publisher<S>, sleeper: Z, config: PollConfig) -> Self {
        Poller {
            source,
            publisher,
            sleeper,
            config,
            previous: None,
        }
    }

    pub fn previous(&self) -> Option<&Reading> {
        self.previous.as_ref()
    }

    /// Runs until fetching fails more often than the retry policy allows.
    pub fn run(&mut self) -> Result<(), PollError> {
        log::info!(
            "Polling every {}s (backoff {}s)",
            self.config.interval.as_secs(),
            self.config.retry.interval.as_secs()
        );
        loop {
            let outcome = self.tick()?;
            log::debug!("Tick finished: {:?}", outcome);
        }
    }

    /// One fetch (retried per policy), at most one publish, then the poll interval sleep.
    pub fn tick(&mut self) -> Result<TickOutcome, PollError> {
        let reading = self.fetch()?;

        let is_new = match &self.previous {
            None => true,
            Some(previous) => reading.is_newer_than(previous),
        };
        if !is_new {
            log::info!("No new reading since {}; just sleeping", reading.local_time);
            self.sleep(self.config.interval);
            return Ok(TickOutcome::Unchanged);
        }

        let outcome = match self.publisher.publish(&reading) {
            Ok(PublishOutcome::Published) => TickOutcome::Published,
            Ok(PublishOutcome::Duplicate) => TickOutcome::Duplicate,
            Err(e) => {
                log::error!("Failed to publish reading: {}", e);
                self.sleep(self.config.retry.interval);
                TickOutcome::PublishFailed
            }
        };
        self.previous = Some(reading);
        self.sleep(self.config.interval);
        Ok(outcome)
    }

    fn fetch(&mut self) -> Result<Reading, PollError> {
        let source = &self.source;
        backoff_retry(
            self.config.retry.backoff(),
            &mut self.sleeper,
            || source.fetch().map_err(backoff::Error::transient),
            log_fetch_error,
        )
        .map_err(PollError::FetchRetriesExhausted)
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeper.sleep(duration);
    }
}

fn log_fetch_error(err: &FetchError, wait: Duration) {
    match err.kind() {
        FetchErrorKind::Transient => {
            log::warn!("Fetching reading failed: {}; retrying in {}s", err, wait.as_secs())
        }
        FetchErrorKind::Data => {
            log::error!("Unusable reading: {}; retrying in {}s", err, wait.as_secs())
        }
    }
}
