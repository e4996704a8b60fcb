//! Integration Test Suite for the Sequitur auction contracts
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `e2e_tests`: Full auction cycles across the house, token and assets
//! - `refund_tests`: Refund delivery, including recipients that cannot receive
//! - `error_tests`: Rejected operations and edge cases

#![cfg(test)]

pub mod harness;
pub mod refund_tests;

pub use harness::*;
