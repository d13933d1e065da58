use std::thread;
use std::time::Duration;

/// Blocking wait, injectable so the polling loop can be driven without real time passing.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        log::debug!("Sleeping for {} seconds", duration.as_secs());
        thread::sleep(duration);
        log::debug!("Waking up");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records requested sleeps instead of waiting.
    #[derive(Default)]
    pub(crate) struct RecordingSleeper {
        pub sleeps: Vec<Duration>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    #[test]
    fn thread_sleeper_waits() {
        let start = std::time::Instant::now();
        ThreadSleeper.sleep(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
