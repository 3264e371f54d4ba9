//! Backoff arithmetic and the sleep seam for story-stage retries.

use async_trait::async_trait;
use std::time::Duration;

/// Calculate exponential backoff duration for a given attempt index.
///
/// Uses `base_delay * 2^attempt` with a cap at 30 seconds. With the default
/// 1000 ms base this yields 1 s, 2 s, 4 s for attempts 0, 1, 2.
pub fn backoff_delay(attempt: u32, base_delay_ms: u64) -> Duration {
    let delay = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
    Duration::from_millis(delay.min(30_000))
}

/// Executes the backoff sleeps between retry attempts.
///
/// A seam rather than a direct `tokio::time::sleep` call, so tests can record
/// requested durations instead of passing wall time.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records requested sleep durations without sleeping.
    #[derive(Default)]
    pub(crate) struct RecordingSleeper {
        naps: Arc<Mutex<Vec<Duration>>>,
    }

    impl RecordingSleeper {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Shared handle to the recorded durations (clone before moving the
        /// sleeper into the stage under test).
        pub(crate) fn naps_handle(&self) -> Arc<Mutex<Vec<Duration>>> {
            self.naps.clone()
        }
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.naps.lock().unwrap().push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_exponential() {
        assert_eq!(backoff_delay(0, 1000), Duration::from_millis(1000));
        assert_eq!(backoff_delay(1, 1000), Duration::from_millis(2000));
        assert_eq!(backoff_delay(2, 1000), Duration::from_millis(4000));
        assert_eq!(backoff_delay(3, 1000), Duration::from_millis(8000));
    }

    #[test]
    fn test_backoff_capped_at_30s() {
        assert_eq!(backoff_delay(10, 1000), Duration::from_millis(30_000));
    }

    #[test]
    fn test_backoff_monotonically_increasing() {
        let delays: Vec<_> = (0..4).map(|a| backoff_delay(a, 1000)).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_recording_sleeper_captures_durations() {
        let sleeper = testing::RecordingSleeper::new();
        let naps = sleeper.naps_handle();
        sleeper.sleep(Duration::from_secs(1)).await;
        sleeper.sleep(Duration::from_secs(2)).await;
        assert_eq!(
            *naps.lock().unwrap(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }
}
