use std::{num::NonZeroU64, time::Duration};

use rand::Rng;

/// The request retry strategy.
#[derive(Debug)]
pub enum RetryStrategy {
    Constant(ConstantRetryStrategy),
    Dynamic(Box<dyn DynamicRetryStrategy + Send + Sync>),
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::Dynamic(Box::new(DefaultRetryStrategy))
    }
}

impl RetryStrategy {
    pub fn wait(&self, current_retry_count: u64) -> Duration {
        match self {
            Self::Constant(c) => c.wait,
            Self::Dynamic(d) => d.wait_time(current_retry_count),
        }
    }

    pub fn count(&self) -> NonZeroU64 {
        match self {
            Self::Constant(c) => c.count,
            Self::Dynamic(d) => d.retry_count(),
        }
    }
}

/// Dictates requests are retried.
#[derive(Debug, Clone)]
pub struct ConstantRetryStrategy {
    /// Number of times to retry.
    /// <br> Default 3.
    pub count: NonZeroU64,
    /// How much to wait between retries.
    /// <br> Default 1 seconds.
    pub wait: Duration,
}

impl Default for ConstantRetryStrategy {
    fn default() -> Self {
        Self {
            count: NonZeroU64::try_from(3).expect("valid number"),
            wait: Duration::from_secs(1),
        }
    }
}

/// A dynamic retry strategy.
pub trait DynamicRetryStrategy: std::fmt::Debug {
    /// Returns the wait time
    fn wait_time(&self, current_retry_count: u64) -> Duration;
    fn retry_count(&self) -> NonZeroU64;
}

#[derive(Debug)]
pub struct DefaultRetryStrategy;

impl DynamicRetryStrategy for DefaultRetryStrategy {
    fn wait_time(&self, current_retry_count: u64) -> Duration {
        Duration::from_secs_f64((current_retry_count * 2) as f64 / 1.2)
    }

    fn retry_count(&self) -> NonZeroU64 {
        NonZeroU64::try_from(5).expect("valid number")
    }
}

/// The equal-jitter backoff schedule the request executor and the
/// single-part/part upload routines use for their own, mandatory retry
/// budget. This is distinct from [`RetryStrategy`], which governs the
/// outer whole-upload retry layer in [`crate::tasks::upload::FileUploadOptions`].
///
/// `delay(n) = base * 2^n * (0.5 + U(0, 1))`, `n` zero-based.
#[derive(Debug, Clone, Copy)]
pub struct ExecutorBackoff {
    pub base: Duration,
    pub max_retries: u32,
}

impl Default for ExecutorBackoff {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(150),
            max_retries: 5,
        }
    }
}

impl ExecutorBackoff {
    /// Delay before retry attempt `n` (zero-based), with full equal-jitter.
    pub fn delay(&self, n: u32) -> Duration {
        let exp = self.base.as_secs_f64() * 2f64.powi(n as i32);
        let jitter = 0.5 + rand::rng().random::<f64>();
        Duration::from_secs_f64(exp * jitter)
    }

    /// The part-upload 408 schedule, which doesn't require jitter:
    /// `base * 2^n`.
    pub fn delay_no_jitter(&self, n: u32) -> Duration {
        Duration::from_secs_f64(self.base.as_secs_f64() * 2f64.powi(n as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_jitter_stays_within_half_to_one_and_a_half_times_base() {
        let backoff = ExecutorBackoff {
            base: Duration::from_millis(100),
            max_retries: 5,
        };

        for n in 0..5 {
            let base = backoff.base.as_secs_f64() * 2f64.powi(n as i32);

            for _ in 0..100 {
                let delay = backoff.delay(n).as_secs_f64();
                assert!(delay >= base * 0.5);
                assert!(delay < base * 1.5);
            }
        }
    }
}
