use std::time::Duration;

use backoff::backoff::{Backoff, Constant};
use backoff::Error;

use super::Sleeper;

/// How long to wait between failed attempts, and how many retries to allow
/// (`None` retries forever).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval: Duration,
    pub max_retries: Option<u32>,
}

impl RetryPolicy {
    pub fn backoff(&self) -> LimitedBackoff<Constant> {
        LimitedBackoff {
            inner: Constant::new(self.interval),
            max_retries: self.max_retries,
            retries: 0,
        }
    }
}

pub struct LimitedBackoff<B> {
    inner: B,
    max_retries: Option<u32>,
    retries: u32,
}

impl<B: Backoff> Backoff for LimitedBackoff<B> {
    fn next_backoff(&mut self) -> Option<Duration> {
        if self.max_retries.is_some_and(|max| self.retries >= max) {
            return None;
        }
        self.retries += 1;
        self.inner.next_backoff()
    }

    fn reset(&mut self) {
        self.retries = 0;
        self.inner.reset();
    }
}

/// Like `backoff::retry_notify`, but waits through `sleeper`. A transient error
/// left over once the backoff is exhausted is returned as-is.
pub fn backoff_retry<B, S, F, N, T, E>(
    mut backoff: B,
    sleeper: &mut S,
    mut fn_to_try: F,
    mut notify: N,
) -> Result<T, E>
where
    B: Backoff,
    S: Sleeper + ?Sized,
    F: FnMut() -> Result<T, Error<E>>,
    N: FnMut(&E, Duration),
{
    backoff.reset();
    loop {
        let err = match fn_to_try() {
            Ok(value) => return Ok(value),
            Err(Error::Permanent(err)) => return Err(err),
            Err(Error::Transient { err, .. }) => err,
        };
        match backoff.next_backoff() {
            Some(dur) => {
                notify(&err, dur);
                sleeper.sleep(dur);
            }
            None => return Err(err),
        }
    }
}
