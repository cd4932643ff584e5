//! Drop timer driven by per-frame elapsed time.

use crate::types::DEFAULT_DROP_INTERVAL_MS;

/// Accumulates frame time and reports when an automatic drop is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    drop_counter_ms: u32,
    drop_interval_ms: u32,
}

impl GameClock {
    pub fn new(drop_interval_ms: u32) -> Self {
        Self {
            drop_counter_ms: 0,
            drop_interval_ms,
        }
    }

    /// Add `elapsed_ms`; true once the counter is strictly past the interval.
    ///
    /// The counter is not reset here. The drop that follows resets it.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        self.drop_counter_ms > self.drop_interval_ms
    }

    pub fn reset(&mut self) {
        self.drop_counter_ms = 0;
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_INTERVAL_MS)
    }
}
