use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_OFFSET_PX};

/// Construction-time configuration of a bottom scroll listener, immutable once the listener is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollListenerConfig {
    /// Trailing-edge coalescing window in milliseconds, 0 disables coalescing.
    pub debounce_ms: u64,
    /// Distance from the true bottom that counts as being at the bottom, negative values require overscroll.
    pub offset_px: i32,
}

impl Default for ScrollListenerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            offset_px: DEFAULT_OFFSET_PX,
        }
    }
}

impl ScrollListenerConfig {
    pub fn new(debounce_ms: u64, offset_px: i32) -> Self {
        Self { debounce_ms, offset_px }
    }

    pub fn debounce_delay(&self) -> Option<Duration> {
        match self.debounce_ms {
            0 => None,
            debounce_ms => Some(Duration::from_millis(debounce_ms)),
        }
    }
}
