//! Reentrancy guard backed by instance storage
//!
//! The flag only needs clearing on the success path: a failed invocation is
//! rolled back by the host together with the flag it set.

use soroban_sdk::Env;

mod keys {
    use soroban_sdk::{symbol_short, Symbol};
    pub const GUARD: Symbol = symbol_short!("RE_GUARD");
}

pub struct ReentrancyGuard;

impl ReentrancyGuard {
    pub fn is_entered(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&keys::GUARD)
            .unwrap_or(false)
    }

    /// Mark the contract as entered
    ///
    /// # Panics
    /// Panics with "Reentrancy detected" if the guard is already held
    pub fn enter(e: &Env) {
        if Self::is_entered(e) {
            panic!("Reentrancy detected");
        }
        e.storage().instance().set(&keys::GUARD, &true);
    }

    pub fn exit(e: &Env) {
        e.storage().instance().remove(&keys::GUARD);
    }
}
