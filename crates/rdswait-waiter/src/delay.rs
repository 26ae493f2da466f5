//! Jittered delay between probes.

use std::time::Duration;

use rand::Rng;

/// Fixed part of the delay between probes.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(25);

/// Upper bound (exclusive) of the random part of the delay.
pub const DEFAULT_JITTER: Duration = Duration::from_secs(5);

/// Produces `base + U[0, jitter)` at millisecond granularity.
///
/// The jitter keeps many concurrent waiters from polling the status API in
/// lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    base: Duration,
    jitter: Duration,
}

impl DelayPolicy {
    /// Create a new delay policy.
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Fixed part of every delay.
    pub fn base(&self) -> Duration {
        self.base
    }

    /// Exclusive upper bound of the random part.
    pub fn jitter(&self) -> Duration {
        self.jitter
    }

    /// Longest delay this policy can produce.
    pub fn max_delay(&self) -> Duration {
        self.base.saturating_add(self.jitter)
    }

    /// Draw a delay using the thread-local RNG.
    pub fn next_delay(&self) -> Duration {
        self.next_delay_with(&mut rand::thread_rng())
    }

    /// Draw a delay from the given random source.
    pub fn next_delay_with<R: Rng>(&self, rng: &mut R) -> Duration {
        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return self.base;
        }
        self.base
            .saturating_add(Duration::from_millis(rng.gen_range(0..jitter_ms)))
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DELAY, DEFAULT_JITTER)
    }
}
