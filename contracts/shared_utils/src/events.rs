//! Event emission patterns and utilities

use soroban_sdk::{Address, Env, IntoVal, Symbol, Topics, Val};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with a single name topic
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event name
    /// * `data` - The event data
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: IntoVal<Env, Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: IntoVal<Env, Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit an event keyed by an address, e.g. a credited or debited account
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `name` - The event name
    /// * `account` - The account the event is about
    /// * `data` - The event data
    pub fn emit_for_account<T>(e: &Env, name: &str, account: &Address, data: T)
    where
        T: IntoVal<Env, Val>,
    {
        Self::emit_with_topics(e, (Symbol::new(e, name), account.clone()), data);
    }

    /// Emit an event keyed by a token id
    pub fn emit_for_token<T>(e: &Env, name: &str, token_id: u32, data: T)
    where
        T: IntoVal<Env, Val>,
    {
        Self::emit_with_topics(e, (Symbol::new(e, name), token_id), data);
    }
}
