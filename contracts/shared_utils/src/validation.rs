//! Validation utilities for common input validation patterns
//!
//! The predicates let contracts map failures onto their own error enums.

/// Validation utility functions
pub struct Validation;

impl Validation {
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    pub fn is_non_negative(amount: i128) -> bool {
        amount >= 0
    }

    pub fn is_valid_duration(duration_seconds: u64) -> bool {
        duration_seconds > 0
    }
}
