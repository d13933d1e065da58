mod backoff_retry;
mod load_dotenv;
mod sleep;

pub use backoff_retry::{backoff_retry, LimitedBackoff, RetryPolicy};
pub use load_dotenv::load_dotenv;
pub use sleep::{Sleeper, ThreadSleeper};

#[cfg(test)]
pub(crate) use sleep::tests::RecordingSleeper;
