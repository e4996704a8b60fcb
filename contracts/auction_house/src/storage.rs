//! Instance storage for the auction house configuration and the live auction

use crate::{Auction, AuctionError, AuctionTerms};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum DataKey {
    /// Token issuer contract
    Token,
    /// Asset bids are paid in
    PaymentToken,
    /// Wrapped form of the payment asset, target of fallback credits
    WrappedAsset,
    /// Receives the proceeds of every settled auction
    Beneficiary,
    /// Terms applied to the next auction
    Terms,
    /// The single live (or last settled) auction
    Auction,
}

fn get_address(e: &Env, key: &DataKey) -> Result<Address, AuctionError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(AuctionError::NotInitialized)
}

pub fn get_token(e: &Env) -> Result<Address, AuctionError> {
    get_address(e, &DataKey::Token)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn get_payment_token(e: &Env) -> Result<Address, AuctionError> {
    get_address(e, &DataKey::PaymentToken)
}

pub fn set_payment_token(e: &Env, payment_token: &Address) {
    e.storage().instance().set(&DataKey::PaymentToken, payment_token);
}

pub fn get_wrapped_asset(e: &Env) -> Result<Address, AuctionError> {
    get_address(e, &DataKey::WrappedAsset)
}

pub fn set_wrapped_asset(e: &Env, wrapped_asset: &Address) {
    e.storage().instance().set(&DataKey::WrappedAsset, wrapped_asset);
}

pub fn get_beneficiary(e: &Env) -> Result<Address, AuctionError> {
    get_address(e, &DataKey::Beneficiary)
}

pub fn set_beneficiary(e: &Env, beneficiary: &Address) {
    e.storage().instance().set(&DataKey::Beneficiary, beneficiary);
}

pub fn get_terms(e: &Env) -> Result<AuctionTerms, AuctionError> {
    e.storage()
        .instance()
        .get(&DataKey::Terms)
        .ok_or(AuctionError::NotInitialized)
}

pub fn set_terms(e: &Env, terms: &AuctionTerms) {
    e.storage().instance().set(&DataKey::Terms, terms);
}

pub fn get_auction(e: &Env) -> Option<Auction> {
    e.storage().instance().get(&DataKey::Auction)
}

pub fn set_auction(e: &Env, auction: &Auction) {
    e.storage().instance().set(&DataKey::Auction, auction);
}
