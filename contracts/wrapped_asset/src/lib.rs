#![no_std]

//! Wrapped form of a Stellar asset.
//!
//! Anyone can deposit the underlying on behalf of another account and the
//! credited account withdraws it to any address it chooses. The auction
//! house uses this as the place a refund lands when the bidder cannot
//! receive the underlying directly.

use shared_utils::{Events, Validation};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env};


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WrappedAssetError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
}

#[contracttype]
pub enum DataKey {
    Underlying,
    TotalSupply,
    Balance(Address),
}

mod storage {
    use super::*;

    pub fn get_underlying(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Underlying)
    }

    pub fn set_underlying(e: &Env, underlying: &Address) {
        e.storage().instance().set(&DataKey::Underlying, underlying);
    }

    pub fn get_total_supply(e: &Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(e: &Env, supply: i128) {
        e.storage().instance().set(&DataKey::TotalSupply, &supply);
    }

    pub fn get_balance(e: &Env, id: &Address) -> i128 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(e: &Env, id: &Address, balance: i128) {
        let key = DataKey::Balance(id.clone());
        if balance == 0 {
            e.storage().persistent().remove(&key);
        } else {
            e.storage().persistent().set(&key, &balance);
        }
    }
}

#[contract]
pub struct WrappedAsset;

#[contractimpl]
impl WrappedAsset {
    /// Bind the wrapper to its underlying asset contract
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If an underlying is already set
    pub fn initialize(e: Env, underlying: Address) -> Result<(), WrappedAssetError> {
        if storage::get_underlying(&e).is_some() {
            return Err(WrappedAssetError::AlreadyInitialized);
        }
        storage::set_underlying(&e, &underlying);
        storage::set_total_supply(&e, 0);
        Ok(())
    }

    /// Pull `amount` of the underlying from `from` and credit it to `to`
    ///
    /// # Errors
    /// * `NotInitialized` - If the underlying is not set
    /// * `InvalidAmount` - If `amount` is not positive
    pub fn deposit_for(
        e: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), WrappedAssetError> {
        from.require_auth();
        if !Validation::is_positive(amount) {
            return Err(WrappedAssetError::InvalidAmount);
        }
        let underlying = storage::get_underlying(&e).ok_or(WrappedAssetError::NotInitialized)?;

        token::Client::new(&e, &underlying).transfer(&from, &e.current_contract_address(), &amount);

        storage::set_balance(&e, &to, storage::get_balance(&e, &to) + amount);
        storage::set_total_supply(&e, storage::get_total_supply(&e) + amount);

        Events::emit_for_account(&e, "Deposit", &to, (from, amount));
        Ok(())
    }

    /// Burn `amount` of `owner`'s credit and pay the underlying to `to`
    ///
    /// # Errors
    /// * `InvalidAmount` - If `amount` is not positive
    /// * `InsufficientBalance` - If `owner` holds less than `amount`
    pub fn withdraw(
        e: Env,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), WrappedAssetError> {
        owner.require_auth();
        if !Validation::is_positive(amount) {
            return Err(WrappedAssetError::InvalidAmount);
        }
        let underlying = storage::get_underlying(&e).ok_or(WrappedAssetError::NotInitialized)?;

        let balance = storage::get_balance(&e, &owner);
        if balance < amount {
            return Err(WrappedAssetError::InsufficientBalance);
        }
        storage::set_balance(&e, &owner, balance - amount);
        storage::set_total_supply(&e, storage::get_total_supply(&e) - amount);

        token::Client::new(&e, &underlying).transfer(&e.current_contract_address(), &to, &amount);

        Events::emit_for_account(&e, "Withdrawal", &owner, (to, amount));
        Ok(())
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        storage::get_balance(&e, &id)
    }

    pub fn total_supply(e: Env) -> i128 {
        storage::get_total_supply(&e)
    }

    pub fn underlying(e: Env) -> Result<Address, WrappedAssetError> {
        storage::get_underlying(&e).ok_or(WrappedAssetError::NotInitialized)
    }
}
