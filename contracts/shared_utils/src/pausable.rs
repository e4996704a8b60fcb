//! Pause control utilities
use super::events::Events;
use soroban_sdk::{Env, Symbol};

pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};
    pub const PAUSED: Symbol = symbol_short!("PAUSED");
}

pub struct Pausable;

impl Pausable {
    /// Check if the contract is paused
    ///
    /// A contract that never stored the flag is treated as unpaused.
    pub fn is_paused(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&keys::PAUSED)
            .unwrap_or(false)
    }

    /// Pause and emit `Paused`. Pausing twice is a no-op.
    pub fn pause(e: &Env) {
        if Self::is_paused(e) {
            return;
        }
        e.storage().instance().set(&keys::PAUSED, &true);
        Events::emit(e, Symbol::new(e, "Paused"), e.ledger().timestamp());
    }

    /// Unpause and emit `Unpaused`. Unpausing twice is a no-op.
    pub fn unpause(e: &Env) {
        if !Self::is_paused(e) {
            return;
        }
        e.storage().instance().set(&keys::PAUSED, &false);
        Events::emit(e, Symbol::new(e, "Unpaused"), e.ledger().timestamp());
    }

    /// Store the flag without emitting, for use during initialization
    pub fn set_initial(e: &Env, paused: bool) {
        e.storage().instance().set(&keys::PAUSED, &paused);
    }
}
