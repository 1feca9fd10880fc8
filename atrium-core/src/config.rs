//! Configuration type definitions
//!
//! The configuration is a plain value constructed once at startup and
//! handed to the engine by move. Freezing is by ownership: once the
//! engine owns it there is no setter left to call, so no runtime
//! "locked" sentinel is needed.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sampling interval
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 1_000;

/// Maximum length of the measurement base name
pub const MAX_BASE_NAME_LEN: usize = 32;

/// Hub configuration, frozen by ownership after construction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HubConfig {
    /// Milliseconds between sample rounds
    pub refresh_interval_ms: u32,
    /// Base name reported in every measurement envelope
    pub base_name: String<MAX_BASE_NAME_LEN>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HubConfig {
    /// Default configuration: 1 s refresh, base name `"atrium"`
    pub fn new() -> Self {
        let mut base_name = String::new();
        let _ = base_name.push_str("atrium");
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            base_name,
        }
    }

    /// Override the sampling interval
    pub fn with_refresh_interval(mut self, interval_ms: u32) -> Self {
        self.refresh_interval_ms = interval_ms;
        self
    }

    /// Override the base name (truncated to [`MAX_BASE_NAME_LEN`])
    pub fn with_base_name(mut self, name: &str) -> Self {
        self.base_name.clear();
        for c in name.chars() {
            if self.base_name.push(c).is_err() {
                break;
            }
        }
        self
    }
}
