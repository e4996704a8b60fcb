#![no_std]

//! English auction house selling one freshly minted token per cycle.
//!
//! Each auction runs for a fixed duration, extended whenever a bid lands
//! inside the trailing time buffer. Bids are escrowed in the payment asset;
//! an outbid bidder is refunded through [`disburser::pay_with_fallback`].
//! Anyone may settle an expired auction, which hands the token to the winner
//! (or burns it), pays the beneficiary, and opens the next auction unless the
//! house is paused.

use auction_interface::TokenIssuerClient;
use shared_utils::{
    minimum_next_bid, AccessControl, ErrorHelper, Pausable, ReentrancyGuard, Storage, TimeUtils,
    Validation,
};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env};

mod disburser;
mod events;
mod storage;


pub use disburser::Payout;

/// Upper bound for the minimum bid increment
pub const MAX_MIN_BID_INCREMENT_PERCENTAGE: u32 = 100;

/// Longest auction the house will open (365 days)
pub const MAX_DURATION: u64 = 365 * 24 * 60 * 60;

// ============================================================================
// Error Types
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// No auction has been created yet
    NotOpenForBidding = 3,
    /// Bid names a token other than the one for sale
    WrongToken = 4,
    /// Auction is settled or past its end time
    AuctionExpired = 5,
    /// First bid is below the reserve price
    BelowReserve = 6,
    /// Bid does not beat the highest bid by the minimum increment
    BelowIncrement = 7,
    /// Settlement attempted before the end time
    AuctionNotEnded = 8,
    /// Auction has already been settled
    AlreadySettled = 9,
    /// There is no auction to settle
    NoAuction = 10,
    /// Token issuer refused to mint the next token
    MintFailed = 11,
    /// Auction terms are out of range
    InvalidConfig = 12,
    /// Bid amount is not positive
    InvalidAmount = 13,
    /// Operation requires the house to be paused
    NotPaused = 14,
}

// ============================================================================
// Data Types
// ============================================================================

/// Operator-tunable parameters, copied onto each auction when it opens
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionTerms {
    /// Trailing window (seconds) in which a bid pushes the end time out
    pub time_buffer: u64,
    /// Minimum first bid
    pub reserve_price: i128,
    /// Minimum relative step for outbidding, in percent
    pub min_bid_increment_percentage: u32,
    /// Length of an auction in seconds
    pub duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub token_id: u32,
    /// 0 until the first bid
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub start_time: u64,
    /// Last timestamp at which bids are accepted
    pub end_time: u64,
    pub settled: bool,
    pub terms: AuctionTerms,
}

impl Auction {
    /// Smallest bid this auction accepts right now
    pub fn minimum_bid(&self) -> i128 {
        if self.highest_bid == 0 {
            self.terms.reserve_price
        } else {
            minimum_next_bid(self.highest_bid, self.terms.min_bid_increment_percentage)
        }
    }
}

fn validate_terms(terms: &AuctionTerms) -> Result<(), AuctionError> {
    if !Validation::is_valid_duration(terms.duration)
        || terms.duration > MAX_DURATION
        || terms.time_buffer > terms.duration
        || !Validation::is_non_negative(terms.reserve_price)
        || terms.min_bid_increment_percentage > MAX_MIN_BID_INCREMENT_PERCENTAGE
    {
        return Err(AuctionError::InvalidConfig);
    }
    Ok(())
}

fn require_initialized(e: &Env) -> Result<(), AuctionError> {
    if !Storage::is_initialized(e) {
        return Err(AuctionError::NotInitialized);
    }
    Ok(())
}

/// Mint the next token and open an auction for it
fn create_auction(e: &Env) -> Result<Auction, AuctionError> {
    let token = TokenIssuerClient::new(e, &storage::get_token(e)?);
    let token_id = match token.try_mint(&e.current_contract_address()) {
        Ok(Ok(token_id)) => token_id,
        _ => {
            ErrorHelper::log_error_with_context(e, "auction_house::create", "mint failed");
            return Err(AuctionError::MintFailed);
        }
    };

    let terms = storage::get_terms(e)?;
    let start_time = TimeUtils::now(e);
    let auction = Auction {
        token_id,
        highest_bid: 0,
        highest_bidder: None,
        start_time,
        end_time: TimeUtils::window_end(start_time, terms.duration),
        settled: false,
        terms,
    };
    storage::set_auction(e, &auction);
    events::auction_created(e, &auction);

    Ok(auction)
}

/// Close the live auction: token to the winner or burned, proceeds to the
/// beneficiary
fn settle(e: &Env) -> Result<Auction, AuctionError> {
    // CHECKS
    let mut auction = storage::get_auction(e).ok_or(AuctionError::NoAuction)?;
    if auction.settled {
        return Err(AuctionError::AlreadySettled);
    }
    if !TimeUtils::has_reached(TimeUtils::now(e), auction.end_time) {
        return Err(AuctionError::AuctionNotEnded);
    }

    // EFFECTS
    auction.settled = true;
    storage::set_auction(e, &auction);

    // INTERACTIONS
    let house = e.current_contract_address();
    let token = TokenIssuerClient::new(e, &storage::get_token(e)?);
    match &auction.highest_bidder {
        Some(winner) => token.transfer(&house, winner, &auction.token_id),
        None => token.burn(&house, &auction.token_id),
    }

    if auction.highest_bid > 0 {
        let beneficiary = storage::get_beneficiary(e)?;
        disburser::pay_with_fallback(e, &beneficiary, auction.highest_bid)?;
    }

    events::auction_settled(
        e,
        auction.token_id,
        auction.highest_bidder.clone(),
        auction.highest_bid,
    );

    Ok(auction)
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the auction house
    ///
    /// The house starts paused; the first `unpause` opens the first auction.
    /// The house must be registered as the token's minter before that.
    ///
    /// # Arguments
    /// * `admin` - Operator allowed to pause, unpause and change the terms
    /// * `token` - Token issuer minting the items for sale
    /// * `payment_token` - Asset bids are paid in
    /// * `wrapped_asset` - Wrapper of `payment_token` used for fallback credits
    /// * `beneficiary` - Receives the winning bid of every auction
    /// * `terms` - Terms of the first auction
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    /// * `InvalidConfig` - If the terms are out of range
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        payment_token: Address,
        wrapped_asset: Address,
        beneficiary: Address,
        terms: AuctionTerms,
    ) -> Result<(), AuctionError> {
        if Storage::is_initialized(&e) {
            return Err(AuctionError::AlreadyInitialized);
        }
        validate_terms(&terms)?;

        Storage::set_initialized(&e);
        Storage::set_admin(&e, &admin);
        storage::set_token(&e, &token);
        storage::set_payment_token(&e, &payment_token);
        storage::set_wrapped_asset(&e, &wrapped_asset);
        storage::set_beneficiary(&e, &beneficiary);
        storage::set_terms(&e, &terms);
        Pausable::set_initial(&e, true);

        Ok(())
    }

    // ========================================================================
    // Bidding
    // ========================================================================

    /// Bid `amount` of the payment asset on `token_id`
    ///
    /// The amount is pulled from `bidder` into escrow and the previous
    /// highest bidder is refunded. A bid landing within `time_buffer` of the
    /// end time moves the end time to `now + time_buffer`. Bidding stays
    /// open while the house is paused.
    ///
    /// # Errors
    /// * `InvalidAmount` - If `amount` is not positive
    /// * `NotOpenForBidding` - If no auction has been created yet
    /// * `WrongToken` - If `token_id` is not the token for sale
    /// * `AuctionExpired` - If the auction is settled or past its end time
    /// * `BelowReserve` - If the first bid is below the reserve price
    /// * `BelowIncrement` - If the bid does not beat the highest bid by the
    ///   minimum increment
    pub fn create_bid(
        e: Env,
        bidder: Address,
        token_id: u32,
        amount: i128,
    ) -> Result<(), AuctionError> {
        bidder.require_auth();
        ReentrancyGuard::enter(&e);

        // CHECKS
        if !Validation::is_positive(amount) {
            return Err(AuctionError::InvalidAmount);
        }
        let mut auction = storage::get_auction(&e).ok_or(AuctionError::NotOpenForBidding)?;
        if auction.token_id != token_id {
            return Err(AuctionError::WrongToken);
        }
        let now = TimeUtils::now(&e);
        if auction.settled || !TimeUtils::is_within(now, auction.start_time, auction.end_time) {
            return Err(AuctionError::AuctionExpired);
        }
        if auction.highest_bid == 0 && amount < auction.terms.reserve_price {
            return Err(AuctionError::BelowReserve);
        }
        if amount < auction.minimum_bid() {
            return Err(AuctionError::BelowIncrement);
        }

        // EFFECTS
        let previous_bidder = auction.highest_bidder.clone();
        let previous_bid = auction.highest_bid;

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());

        let extended = TimeUtils::time_remaining(now, auction.end_time) < auction.terms.time_buffer;
        if extended {
            auction.end_time = TimeUtils::window_end(now, auction.terms.time_buffer);
        }
        storage::set_auction(&e, &auction);

        // INTERACTIONS
        let payment_token = storage::get_payment_token(&e)?;
        token::Client::new(&e, &payment_token).transfer(
            &bidder,
            &e.current_contract_address(),
            &amount,
        );

        if let Some(previous_bidder) = previous_bidder {
            disburser::pay_with_fallback(&e, &previous_bidder, previous_bid)?;
        }

        ReentrancyGuard::exit(&e);

        events::auction_bid(&e, token_id, &bidder, amount, extended);
        if extended {
            events::auction_extended(&e, token_id, auction.end_time);
        }

        Ok(())
    }

    // ========================================================================
    // Settlement
    // ========================================================================

    /// Settle the expired auction and open the next one
    ///
    /// Callable by anyone once the end time is reached. While the house is
    /// paused only the settlement happens. If the token issuer refuses the
    /// next mint, the settlement still completes and the house pauses.
    ///
    /// # Errors
    /// * `NoAuction` - If no auction was ever created
    /// * `AlreadySettled` - If the auction was already settled
    /// * `AuctionNotEnded` - If the end time has not been reached
    pub fn settle_and_create_next(e: Env) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        ReentrancyGuard::enter(&e);

        settle(&e)?;

        if !Pausable::is_paused(&e) && create_auction(&e).is_err() {
            ErrorHelper::log_warning(
                &e,
                "auction_house::settle",
                "next auction could not be created, pausing",
            );
            Pausable::pause(&e);
        }

        ReentrancyGuard::exit(&e);
        Ok(())
    }

    /// Settle the expired auction without opening another one
    ///
    /// # Errors
    /// * `NotPaused` - If the house is not paused
    /// * `NoAuction`, `AlreadySettled`, `AuctionNotEnded` - As for
    ///   `settle_and_create_next`
    pub fn settle_auction(e: Env) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        if !Pausable::is_paused(&e) {
            return Err(AuctionError::NotPaused);
        }
        ReentrancyGuard::enter(&e);

        settle(&e)?;

        ReentrancyGuard::exit(&e);
        Ok(())
    }

    // ========================================================================
    // Pause Control
    // ========================================================================

    /// Stop the automatic creation of the next auction (admin only)
    ///
    /// The auction in progress keeps accepting bids and can still be settled.
    pub fn pause(e: Env) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        AccessControl::require_admin(&e);

        Pausable::pause(&e);
        Ok(())
    }

    /// Resume the auction cycle (admin only)
    ///
    /// Opens a new auction unless one is still in progress.
    ///
    /// # Errors
    /// * `MintFailed` - If the token issuer refuses to mint; the house stays
    ///   paused
    pub fn unpause(e: Env) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        AccessControl::require_admin(&e);

        Pausable::unpause(&e);

        let in_progress = storage::get_auction(&e).map_or(false, |auction| !auction.settled);
        if !in_progress {
            create_auction(&e)?;
        }
        Ok(())
    }

    // ========================================================================
    // Terms
    // ========================================================================

    /// Set the time buffer applied from the next auction on (admin only)
    ///
    /// # Errors
    /// * `InvalidConfig` - If `time_buffer` exceeds the auction duration
    pub fn set_time_buffer(e: Env, time_buffer: u64) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        AccessControl::require_admin(&e);

        let mut terms = storage::get_terms(&e)?;
        terms.time_buffer = time_buffer;
        validate_terms(&terms)?;
        storage::set_terms(&e, &terms);

        events::time_buffer_updated(&e, time_buffer);
        Ok(())
    }

    /// Set the reserve price applied from the next auction on (admin only)
    ///
    /// # Errors
    /// * `InvalidConfig` - If `reserve_price` is negative
    pub fn set_reserve_price(e: Env, reserve_price: i128) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        AccessControl::require_admin(&e);

        let mut terms = storage::get_terms(&e)?;
        terms.reserve_price = reserve_price;
        validate_terms(&terms)?;
        storage::set_terms(&e, &terms);

        events::reserve_price_updated(&e, reserve_price);
        Ok(())
    }

    /// Set the minimum bid increment applied from the next auction on
    /// (admin only)
    ///
    /// # Errors
    /// * `InvalidConfig` - If `percentage` exceeds 100
    pub fn set_min_bid_increment_percentage(e: Env, percentage: u32) -> Result<(), AuctionError> {
        require_initialized(&e)?;
        AccessControl::require_admin(&e);

        let mut terms = storage::get_terms(&e)?;
        terms.min_bid_increment_percentage = percentage;
        validate_terms(&terms)?;
        storage::set_terms(&e, &terms);

        events::min_bid_increment_updated(&e, percentage);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The live auction, or the last settled one while paused
    pub fn auction(e: Env) -> Option<Auction> {
        storage::get_auction(&e)
    }

    /// Smallest amount `create_bid` currently accepts
    ///
    /// # Errors
    /// * `NotOpenForBidding` - If no auction has been created yet
    /// * `AuctionExpired` - If the auction is settled
    pub fn minimum_bid(e: Env) -> Result<i128, AuctionError> {
        let auction = storage::get_auction(&e).ok_or(AuctionError::NotOpenForBidding)?;
        if auction.settled {
            return Err(AuctionError::AuctionExpired);
        }
        Ok(auction.minimum_bid())
    }

    /// Terms the next auction will be created with
    pub fn terms(e: Env) -> Result<AuctionTerms, AuctionError> {
        storage::get_terms(&e)
    }

    pub fn admin(e: Env) -> Result<Address, AuctionError> {
        Storage::get_admin(&e).ok_or(AuctionError::NotInitialized)
    }

    pub fn beneficiary(e: Env) -> Result<Address, AuctionError> {
        storage::get_beneficiary(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        Pausable::is_paused(&e)
    }
}
