//! Time utilities for timestamp and window calculations

use soroban_sdk::Env;

/// Time utility functions for working with ledger timestamps
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// End of a window opened at `start` lasting `duration` seconds
    ///
    /// # Panics
    /// Panics on timestamp overflow
    pub fn window_end(start: u64, duration: u64) -> u64 {
        start
            .checked_add(duration)
            .expect("Time: timestamp overflow")
    }

    /// Check if `now` lies within the inclusive window `[start, end]`
    pub fn is_within(now: u64, start: u64, end: u64) -> bool {
        now >= start && now <= end
    }

    /// Check if `now` has reached `deadline`
    pub fn has_reached(now: u64, deadline: u64) -> bool {
        now >= deadline
    }

    /// Seconds left until `deadline` (0 once it has passed)
    pub fn time_remaining(now: u64, deadline: u64) -> u64 {
        deadline.saturating_sub(now)
    }
}
