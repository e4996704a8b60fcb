#![no_std]
use shared_utils::{AccessControl, Events, Storage};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, String, Symbol,
};


/// Hard cap on the number of tokens ever minted, reward tokens included
pub const MAX_SUPPLY: u32 = 401;

/// Every token id that is a multiple of this goes to the sounders DAO
pub const SOUNDERS_REWARD_INTERVAL: u32 = 10;

const NAME: &str = "Nouns Sequitur";
const SYMBOL: &str = "NOUNSSEQUITUR";
const URI_SCHEME: &[u8] = b"ipfs://";
const DEFAULT_CONTRACT_URI_HASH: &str = "QmZi1n79FqWt2tTLwCqiy6nLM6xLGRsEPQ5JmReJQKNNzX";
const MAX_URI_LEN: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Token with the given token_id does not exist
    TokenNotFound = 3,
    /// Caller is not allowed to perform this action
    Unauthorized = 4,
    /// `from` does not hold the token
    NotOwner = 5,
    /// All tokens have been minted
    MaxSupplyReached = 6,
    /// Contract URI hash is empty, too long or not UTF-8
    InvalidUriHash = 7,
}

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    /// Address allowed to mint (the auction house)
    Minter,
    /// Recipient of the reward tokens
    SoundersDao,
    /// Next token id to mint
    NextTokenId,
    /// Number of tokens in existence
    TotalSupply,
    /// IPFS hash behind `contract_uri`
    ContractUriHash,
    /// Holder of a token (token_id -> Address)
    TokenOwner(u32),
    /// Number of tokens held (Address -> u32)
    Balance(Address),
}

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;

    pub fn set_minter(e: &Env, minter: &Address) {
        e.storage().instance().set(&DataKey::Minter, minter);
    }

    pub fn get_minter(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Minter)
    }

    pub fn set_sounders_dao(e: &Env, dao: &Address) {
        e.storage().instance().set(&DataKey::SoundersDao, dao);
    }

    pub fn get_sounders_dao(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::SoundersDao)
    }

    pub fn get_next_token_id(e: &Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0)
    }

    pub fn set_next_token_id(e: &Env, next: u32) {
        e.storage().instance().set(&DataKey::NextTokenId, &next);
    }

    pub fn get_total_supply(e: &Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn set_total_supply(e: &Env, supply: u32) {
        e.storage().instance().set(&DataKey::TotalSupply, &supply);
    }

    pub fn get_contract_uri_hash(e: &Env) -> Option<String> {
        e.storage().instance().get(&DataKey::ContractUriHash)
    }

    pub fn set_contract_uri_hash(e: &Env, hash: &String) {
        e.storage().instance().set(&DataKey::ContractUriHash, hash);
    }

    pub fn get_token_owner(e: &Env, token_id: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::TokenOwner(token_id))
    }

    pub fn set_token_owner(e: &Env, token_id: u32, owner: &Address) {
        e.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), owner);
    }

    pub fn remove_token_owner(e: &Env, token_id: u32) {
        e.storage().persistent().remove(&DataKey::TokenOwner(token_id));
    }

    pub fn get_balance(e: &Env, owner: &Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(e: &Env, owner: &Address, balance: u32) {
        let key = DataKey::Balance(owner.clone());
        if balance == 0 {
            e.storage().persistent().remove(&key);
        } else {
            e.storage().persistent().set(&key, &balance);
        }
    }
}

fn is_sounders_reward(token_id: u32) -> bool {
    token_id % SOUNDERS_REWARD_INTERVAL == 0
}

fn mint_to(e: &Env, to: &Address, token_id: u32) {
    storage::set_token_owner(e, token_id, to);
    storage::set_balance(e, to, storage::get_balance(e, to) + 1);
    storage::set_total_supply(e, storage::get_total_supply(e) + 1);

    Events::emit_for_token(e, "Created", token_id, to.clone());
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct SequiturToken;

#[contractimpl]
impl SequiturToken {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the token
    ///
    /// # Arguments
    /// * `owner` - Controls the minter and the contract URI
    /// * `sounders_dao` - Receives every reward token
    /// * `minter` - The only address allowed to mint
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        e: Env,
        owner: Address,
        sounders_dao: Address,
        minter: Address,
    ) -> Result<(), TokenError> {
        if Storage::is_initialized(&e) {
            return Err(TokenError::AlreadyInitialized);
        }

        Storage::set_initialized(&e);
        Storage::set_admin(&e, &owner);
        storage::set_sounders_dao(&e, &sounders_dao);
        storage::set_minter(&e, &minter);
        storage::set_next_token_id(&e, 0);
        storage::set_total_supply(&e, 0);
        storage::set_contract_uri_hash(&e, &String::from_str(&e, DEFAULT_CONTRACT_URI_HASH));

        Ok(())
    }

    // ========================================================================
    // Access Control
    // ========================================================================

    /// Replace the minter (owner only)
    pub fn set_minter(e: Env, minter: Address) -> Result<(), TokenError> {
        if !Storage::is_initialized(&e) {
            return Err(TokenError::NotInitialized);
        }
        AccessControl::require_admin(&e);

        storage::set_minter(&e, &minter);
        Events::emit(&e, Symbol::new(&e, "MinterUpdated"), minter);

        Ok(())
    }

    pub fn minter(e: Env) -> Result<Address, TokenError> {
        storage::get_minter(&e).ok_or(TokenError::NotInitialized)
    }

    /// Hand the reward stream to another DAO address (current DAO only)
    pub fn set_sounders_dao(e: Env, sounders_dao: Address) -> Result<(), TokenError> {
        let current = storage::get_sounders_dao(&e).ok_or(TokenError::NotInitialized)?;
        current.require_auth();

        storage::set_sounders_dao(&e, &sounders_dao);
        Events::emit(&e, Symbol::new(&e, "SoundersDAOUpdated"), sounders_dao);

        Ok(())
    }

    pub fn sounders_dao(e: Env) -> Result<Address, TokenError> {
        storage::get_sounders_dao(&e).ok_or(TokenError::NotInitialized)
    }

    pub fn owner(e: Env) -> Result<Address, TokenError> {
        Storage::get_admin(&e).ok_or(TokenError::NotInitialized)
    }

    // ========================================================================
    // Minting and Burning
    // ========================================================================

    /// Mint the next token to the minter
    ///
    /// When the next id is a reward id, that token is minted to the sounders
    /// DAO first and the minter receives the following one.
    ///
    /// # Returns
    /// The token id minted to the minter
    ///
    /// # Errors
    /// * `NotInitialized` - If the contract has not been initialized
    /// * `Unauthorized` - If `minter` is not the registered minter
    /// * `MaxSupplyReached` - If no token id is left for the minter
    pub fn mint(e: Env, minter: Address) -> Result<u32, TokenError> {
        minter.require_auth();

        let registered = storage::get_minter(&e).ok_or(TokenError::NotInitialized)?;
        if minter != registered {
            return Err(TokenError::Unauthorized);
        }

        let mut token_id = storage::get_next_token_id(&e);
        if is_sounders_reward(token_id) {
            // The reward is only minted alongside a token for the minter.
            if token_id + 1 >= MAX_SUPPLY {
                return Err(TokenError::MaxSupplyReached);
            }
            let dao = storage::get_sounders_dao(&e).ok_or(TokenError::NotInitialized)?;
            mint_to(&e, &dao, token_id);
            token_id += 1;
        }
        if token_id >= MAX_SUPPLY {
            return Err(TokenError::MaxSupplyReached);
        }

        mint_to(&e, &minter, token_id);
        storage::set_next_token_id(&e, token_id + 1);

        Ok(token_id)
    }

    /// Burn a token
    ///
    /// # Errors
    /// * `TokenNotFound` - If the token does not exist
    /// * `Unauthorized` - If `caller` is neither the minter nor the holder
    pub fn burn(e: Env, caller: Address, token_id: u32) -> Result<(), TokenError> {
        caller.require_auth();

        let holder = storage::get_token_owner(&e, token_id).ok_or(TokenError::TokenNotFound)?;
        let is_minter = storage::get_minter(&e).map_or(false, |m| m == caller);
        if caller != holder && !is_minter {
            return Err(TokenError::Unauthorized);
        }

        storage::remove_token_owner(&e, token_id);
        storage::set_balance(&e, &holder, storage::get_balance(&e, &holder) - 1);
        storage::set_total_supply(&e, storage::get_total_supply(&e) - 1);

        Events::emit_for_token(&e, "Burned", token_id, ());

        Ok(())
    }

    // ========================================================================
    // Transfer
    // ========================================================================

    /// Transfer a token to a new holder
    ///
    /// # Errors
    /// * `TokenNotFound` - If the token does not exist
    /// * `NotOwner` - If `from` does not hold the token
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) -> Result<(), TokenError> {
        from.require_auth();

        let holder = storage::get_token_owner(&e, token_id).ok_or(TokenError::TokenNotFound)?;
        if holder != from {
            return Err(TokenError::NotOwner);
        }

        storage::set_token_owner(&e, token_id, &to);
        storage::set_balance(&e, &from, storage::get_balance(&e, &from) - 1);
        storage::set_balance(&e, &to, storage::get_balance(&e, &to) + 1);

        Events::emit_for_token(&e, "Transfer", token_id, (from, to));

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, TokenError> {
        storage::get_token_owner(&e, token_id).ok_or(TokenError::TokenNotFound)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        storage::get_balance(&e, &owner)
    }

    pub fn total_supply(e: Env) -> u32 {
        storage::get_total_supply(&e)
    }

    /// Next token id that will be minted
    pub fn current_token_id(e: Env) -> u32 {
        storage::get_next_token_id(&e)
    }

    pub fn name(e: Env) -> String {
        String::from_str(&e, NAME)
    }

    pub fn symbol(e: Env) -> String {
        String::from_str(&e, SYMBOL)
    }

    // ========================================================================
    // Contract Metadata
    // ========================================================================

    /// `ipfs://` followed by the stored hash
    pub fn contract_uri(e: Env) -> Result<String, TokenError> {
        let hash = storage::get_contract_uri_hash(&e).ok_or(TokenError::NotInitialized)?;
        let hash_len = hash.len() as usize;
        let uri_len = URI_SCHEME.len() + hash_len;
        if uri_len > MAX_URI_LEN {
            return Err(TokenError::InvalidUriHash);
        }

        let mut buf = [0u8; MAX_URI_LEN];
        buf[..URI_SCHEME.len()].copy_from_slice(URI_SCHEME);
        hash.copy_into_slice(&mut buf[URI_SCHEME.len()..uri_len]);
        let uri = core::str::from_utf8(&buf[..uri_len]).map_err(|_| TokenError::InvalidUriHash)?;

        Ok(String::from_str(&e, uri))
    }

    /// Replace the contract URI hash (owner only)
    pub fn set_contract_uri_hash(e: Env, hash: String) -> Result<(), TokenError> {
        if !Storage::is_initialized(&e) {
            return Err(TokenError::NotInitialized);
        }
        AccessControl::require_admin(&e);

        let hash_len = hash.len() as usize;
        if hash_len == 0 || URI_SCHEME.len() + hash_len > MAX_URI_LEN {
            return Err(TokenError::InvalidUriHash);
        }

        storage::set_contract_uri_hash(&e, &hash);
        Events::emit(&e, Symbol::new(&e, "ContractUriUpdated"), hash);

        Ok(())
    }
}
