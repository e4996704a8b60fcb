//! Math utilities for safe arithmetic and bid increment calculations

/// Safe math operations to prevent overflow/underflow
pub struct SafeMath;

impl SafeMath {
    /// Safely add two i128 values, panicking on overflow
    pub fn add(a: i128, b: i128) -> i128 {
        a.checked_add(b).expect("Math: addition overflow")
    }

    /// Safely multiply two i128 values, panicking on overflow
    pub fn mul(a: i128, b: i128) -> i128 {
        a.checked_mul(b).expect("Math: multiplication overflow")
    }

    /// Safely divide two i128 values, panicking on division by zero
    pub fn div(a: i128, b: i128) -> i128 {
        if b == 0 {
            panic!("Math: division by zero");
        }
        a.checked_div(b).expect("Math: division overflow")
    }

    /// Percentage rounded up: `ceil(value * percent / 100)` for non-negative values
    pub fn percent_ceil(value: i128, percent: u32) -> i128 {
        Self::div(Self::add(Self::mul(value, percent as i128), 99), 100)
    }
}

/// Smallest bid that may replace `highest_bid` under `min_increment_percent`
///
/// The increment is `ceil(highest_bid * min_increment_percent / 100)` and
/// never less than one unit, so an accepted bid is always strictly greater
/// than the one it replaces.
///
/// # Examples
/// * 100 at 5% -> 105
/// * 2 at 5% -> 3
/// * 100 at 0% -> 101
pub fn minimum_next_bid(highest_bid: i128, min_increment_percent: u32) -> i128 {
    let increment = SafeMath::percent_ceil(highest_bid, min_increment_percent).max(1);
    SafeMath::add(highest_bid, increment)
}
