//! Access control patterns and utilities

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Require authorization from the stored admin and return it
    ///
    /// Operator entry points take no caller argument: the admin recorded at
    /// initialization must have signed the invocation.
    ///
    /// # Panics
    /// Panics with "Contract not initialized" if no admin is stored
    pub fn require_admin(e: &Env) -> Address {
        let admin = Storage::require_admin_address(e);
        admin.require_auth();
        admin
    }
}
