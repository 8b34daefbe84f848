//! Request pacing for the Riot API
//!
//! The API enforces its own per-key rate caps; the throttle spreads requests
//! out locally so a crawl never trips them. Blocking the caller is the
//! intended backpressure, there is no queueing policy beyond arrival order.

use crate::error::AppError;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum spacing between API calls, derived from a
/// requests-per-minute cap.
///
/// `acquire` is serialized through a mutex held across the wait, so the
/// spacing invariant holds even if multiple tasks share one throttle.
/// Timing uses [`tokio::time::Instant`], which is monotonic and therefore
/// immune to wall-clock adjustments.
#[derive(Debug)]
pub struct Throttle {
    min_interval: Duration,
    last_permit: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Creates a throttle allowing at most `max_requests_per_minute` calls.
    ///
    /// # Returns
    /// * `Ok(Throttle)` - Configured throttle
    /// * `Err(AppError)` - `max_requests_per_minute` was zero
    pub fn new(max_requests_per_minute: u32) -> Result<Self, AppError> {
        if max_requests_per_minute == 0 {
            return Err(AppError::config_error(
                "max_requests_per_minute must be a positive integer",
            ));
        }
        Ok(Throttle {
            min_interval: Duration::from_secs_f64(60.0 / f64::from(max_requests_per_minute)),
            last_permit: Mutex::new(None),
        })
    }

    /// Waits until at least the configured interval has elapsed since the
    /// previous `acquire` returned. The first call returns immediately.
    pub async fn acquire(&self) {
        let mut last_permit = self.last_permit.lock().await;
        if let Some(last) = *last_permit {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last_permit = Some(Instant::now());
    }

    /// The minimum spacing between permitted calls.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
