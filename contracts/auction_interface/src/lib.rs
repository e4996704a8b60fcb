#![no_std]

//! Client interfaces for the collaborators of the auction house.
//!
//! The auction house talks to the token issuer and to the wrapped asset only
//! through these traits, so it never links against their contract crates.
//! The generated `try_*` client methods let callers observe a failed call
//! without aborting their own invocation.

use soroban_sdk::{contractclient, Address, Env};

/// Minting authority for the tokens put up for auction
#[contractclient(name = "TokenIssuerClient")]
pub trait TokenIssuer {
    /// Mint the next token to `minter`; fails if `minter` is not the
    /// registered minter or the supply is exhausted.
    fn mint(env: Env, minter: Address) -> u32;

    /// Destroy `token_id`; `caller` must be the minter or the holder.
    fn burn(env: Env, caller: Address, token_id: u32);

    /// Hand `token_id` from its holder `from` to `to`.
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
}

/// Wrapped form of the payment asset, used as the fallback credit target
#[contractclient(name = "WrappedAssetClient")]
pub trait WrappedAsset {
    /// Pull `amount` of the underlying from `from` and credit it to `to`.
    fn deposit_for(env: Env, from: Address, to: Address, amount: i128);
}
