//! Refresh scheduler
//!
//! Fires a re-sample of all enabled channels once the configured interval
//! has elapsed. The elapsed check uses wrapping subtraction so that the
//! schedule survives the millisecond counter overflowing; an absolute
//! comparison would stall forever after the first wrap.

use crate::cache::SensorCache;
use crate::traits::SensorBus;

/// Periodic sampling driver for the sensor cache
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval_ms: u32,
    last_update_ms: Option<u32>,
}

impl RefreshScheduler {
    /// Create a scheduler firing every `interval_ms` milliseconds
    ///
    /// The first poll always samples; the interval gates every poll
    /// after that.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_update_ms: None,
        }
    }

    /// Configured sampling interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Run one scheduling decision
    ///
    /// When the interval has elapsed, samples every enabled channel,
    /// stamps the cache with `now_ms`, and returns `true` - the caller's
    /// dirty signal. Otherwise returns `false` and touches nothing.
    pub fn poll<B: SensorBus>(
        &mut self,
        now_ms: u32,
        cache: &mut SensorCache,
        bus: &mut B,
    ) -> bool {
        let due = match self.last_update_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.interval_ms,
        };
        if !due {
            return false;
        }

        cache.sample_all(bus);
        cache.set_last_update_ms(now_ms);
        self.last_update_ms = Some(now_ms);
        true
    }
}
