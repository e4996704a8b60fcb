#![no_std]

//! Shared utility library for the auction house contracts
//!
//! Common helpers used by the auction house, the token issuer and the
//! wrapped asset:
//! - Access control (admin storage and checks)
//! - Pausing
//! - Reentrancy guard
//! - Math utilities (safe math, bid increments)
//! - Time utilities (timestamps, windows)
//! - Validation
//! - Error logging
//! - Event emission patterns

pub mod access_control;
pub mod errors;
pub mod events;
pub mod math;
pub mod pausable;
pub mod reentrancy;
pub mod storage;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use pausable::Pausable;
pub use reentrancy::ReentrancyGuard;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
