//! Storage helper utilities for common storage patterns

use soroban_sdk::{Address, Env};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const ADMIN: Symbol = symbol_short!("ADMIN");
    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Get the admin address, if one was stored
    pub fn get_admin(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::ADMIN)
    }

    /// Set admin address in storage
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `admin` - The admin address
    pub fn set_admin(e: &Env, admin: &Address) {
        e.storage().instance().set(&keys::ADMIN, admin);
    }

    /// Get the admin address
    ///
    /// # Panics
    /// Panics with "Contract not initialized" if no admin was ever stored
    pub fn require_admin_address(e: &Env) -> Address {
        Self::get_admin(e).unwrap_or_else(|| panic!("Contract not initialized"))
    }
}
