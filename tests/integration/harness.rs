//! Integration Test Harness
//!
//! This module provides a reusable test harness that:
//! - Boots a Soroban Env
//! - Deploys the payment asset, its wrapper, the token and the auction house
//! - Creates test accounts (admin/bidders/attacker)
//! - Seeds payment asset balances
//! - Provides typed contract clients
//! - Supports deterministic time advancement

use soroban_sdk::{
    testutils::{Address as _, IssuerFlags, Ledger, LedgerInfo},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use auction_house::{Auction, AuctionHouse, AuctionHouseClient, AuctionTerms};
use sequitur_token::{SequiturToken, SequiturTokenClient};
use wrapped_asset::{WrappedAsset, WrappedAssetClient};

/// Trailing window in which a bid extends the auction (15 minutes)
pub const TIME_BUFFER: u64 = 15 * 60;

/// Smallest first bid
pub const RESERVE_PRICE: i128 = 2;

/// Minimum relative step between bids, in percent
pub const MIN_INCREMENT_BID_PERCENTAGE: u32 = 5;

/// Auction length (24 hours)
pub const DURATION: u64 = 60 * 60 * 24;

/// Default bidder initial balance
pub const DEFAULT_USER_BALANCE: i128 = 10_000_000_000_000;

/// One hour in seconds
pub const SECONDS_PER_HOUR: u64 = 3600;

/// CPU ceiling for a single bid, including the refund of the previous bidder
/// whether it is paid or credited
pub const MAX_BID_CPU_INSTRUCTIONS: u64 = 1_500_000;

/// Test accounts container
pub struct TestAccounts {
    pub admin: Address,
    pub beneficiary: Address,
    pub sounders: Address,
    pub bidder_a: Address,
    pub bidder_b: Address,
    pub attacker: Address,
}

impl TestAccounts {
    /// Create new test accounts
    pub fn new(e: &Env) -> Self {
        Self {
            admin: Address::generate(e),
            beneficiary: Address::generate(e),
            sounders: Address::generate(e),
            bidder_a: Address::generate(e),
            bidder_b: Address::generate(e),
            attacker: Address::generate(e),
        }
    }
}

/// Deployed contract addresses
pub struct DeployedContracts {
    pub auction_house: Address,
    pub token: Address,
    pub payment_token: Address,
    pub wrapped_asset: Address,
}

/// Main test harness structure
pub struct TestHarness {
    pub env: Env,
    pub accounts: TestAccounts,
    pub contracts: DeployedContracts,
}

impl TestHarness {
    /// Create a harness with every contract deployed and initialized
    ///
    /// The house is the token's minter and is still paused, so no auction
    /// exists until `start` (or `house().unpause()`) is called.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Set initial ledger state
        env.ledger().set(LedgerInfo {
            timestamp: 1704067200, // Jan 1, 2024 00:00:00 UTC
            protocol_version: 21,
            sequence_number: 1,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 1000,
            min_persistent_entry_ttl: 1000,
            max_entry_ttl: 10000,
        });

        let accounts = TestAccounts::new(&env);

        // Payment asset; revocable so tests can block a recipient
        let payment = env.register_stellar_asset_contract_v2(Address::generate(&env));
        payment.issuer().set_flag(IssuerFlags::RevocableFlag);
        let payment_token = payment.address();

        let wrapped_asset = env.register_contract(None, WrappedAsset);
        let token = env.register_contract(None, SequiturToken);
        let auction_house = env.register_contract(None, AuctionHouse);

        WrappedAssetClient::new(&env, &wrapped_asset).initialize(&payment_token);
        SequiturTokenClient::new(&env, &token).initialize(
            &accounts.admin,
            &accounts.sounders,
            &auction_house,
        );
        AuctionHouseClient::new(&env, &auction_house).initialize(
            &accounts.admin,
            &token,
            &payment_token,
            &wrapped_asset,
            &accounts.beneficiary,
            &Self::default_terms(),
        );

        // Fund bidders
        let asset_admin = StellarAssetClient::new(&env, &payment_token);
        asset_admin.mint(&accounts.bidder_a, &DEFAULT_USER_BALANCE);
        asset_admin.mint(&accounts.bidder_b, &DEFAULT_USER_BALANCE);
        asset_admin.mint(&accounts.attacker, &DEFAULT_USER_BALANCE);

        let contracts = DeployedContracts {
            auction_house,
            token,
            payment_token,
            wrapped_asset,
        };

        Self {
            env,
            accounts,
            contracts,
        }
    }

    /// Terms every harness house is initialized with
    pub fn default_terms() -> AuctionTerms {
        AuctionTerms {
            time_buffer: TIME_BUFFER,
            reserve_price: RESERVE_PRICE,
            min_bid_increment_percentage: MIN_INCREMENT_BID_PERCENTAGE,
            duration: DURATION,
        }
    }

    // ========================================================================
    // Time Management Helpers
    // ========================================================================

    /// Advance time by a specified number of seconds
    pub fn advance_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        ledger.sequence_number += 1;
        self.env.ledger().set(ledger);
    }

    /// Advance time by a specified number of hours
    pub fn advance_hours(&self, hours: u64) {
        self.advance_time(hours * SECONDS_PER_HOUR);
    }

    /// Set timestamp to a specific value
    pub fn set_timestamp(&self, timestamp: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp = timestamp;
        self.env.ledger().set(ledger);
    }

    /// Get current timestamp
    pub fn current_timestamp(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    // ========================================================================
    // Contract Clients
    // ========================================================================

    pub fn house(&self) -> AuctionHouseClient<'_> {
        AuctionHouseClient::new(&self.env, &self.contracts.auction_house)
    }

    pub fn token(&self) -> SequiturTokenClient<'_> {
        SequiturTokenClient::new(&self.env, &self.contracts.token)
    }

    pub fn wrapped(&self) -> WrappedAssetClient<'_> {
        WrappedAssetClient::new(&self.env, &self.contracts.wrapped_asset)
    }

    /// Get payment token client
    pub fn payment_client(&self) -> TokenClient<'_> {
        TokenClient::new(&self.env, &self.contracts.payment_token)
    }

    /// Get stellar asset client for minting and authorization
    pub fn payment_admin_client(&self) -> StellarAssetClient<'_> {
        StellarAssetClient::new(&self.env, &self.contracts.payment_token)
    }

    // ========================================================================
    // Auction Helpers
    // ========================================================================

    /// Unpause the house, opening the first auction, and return it
    pub fn start(&self) -> Auction {
        self.house().unpause();
        self.current_auction()
    }

    /// The auction the house currently reports
    ///
    /// # Panics
    /// Panics if no auction was ever created
    pub fn current_auction(&self) -> Auction {
        match self.house().auction() {
            Some(auction) => auction,
            None => panic!("no auction has been created"),
        }
    }

    /// Bid on the live auction's token
    pub fn bid(&self, bidder: &Address, amount: i128) {
        let token_id = self.current_auction().token_id;
        self.house().create_bid(bidder, &token_id, &amount);
    }

    /// Move past the live auction's end time and settle it
    pub fn settle_after_expiry(&self) {
        let end_time = self.current_auction().end_time;
        if self.current_timestamp() <= end_time {
            self.set_timestamp(end_time + 1);
        }
        self.house().settle_and_create_next();
    }

    /// Check payment asset balance
    pub fn balance(&self, user: &Address) -> i128 {
        self.payment_client().balance(user)
    }

    /// Revoke `user`'s authorization on the payment asset so transfers to it fail
    pub fn block_recipient(&self, user: &Address) {
        self.payment_admin_client().set_authorized(user, &false);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper macro to assert an error result matches expected error
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $expected:pat) => {
        match $result {
            Err($expected) => (),
            Err(e) => panic!("Expected error {:?}, got {:?}", stringify!($expected), e),
            Ok(_) => panic!("Expected error {:?}, got Ok", stringify!($expected)),
        }
    };
}

/// Helper macro to assert success and extract value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(val) => val,
            Err(e) => panic!("Expected Ok, got Err({:?})", e),
        }
    };
}

#[cfg(test)]
mod harness_tests {
    use super::*;

    #[test]
    fn test_harness_creation() {
        let harness = TestHarness::new();

        assert_ne!(harness.accounts.admin, harness.accounts.bidder_a);
        assert_ne!(harness.accounts.bidder_a, harness.accounts.bidder_b);
        assert_ne!(harness.contracts.auction_house, harness.contracts.token);

        assert_eq!(harness.token().minter(), harness.contracts.auction_house);
        assert_eq!(harness.wrapped().underlying(), harness.contracts.payment_token);
        assert!(harness.house().is_paused());
    }

    #[test]
    fn test_time_advancement() {
        let harness = TestHarness::new();
        let initial_time = harness.current_timestamp();

        harness.advance_time(100);
        assert_eq!(harness.current_timestamp(), initial_time + 100);

        harness.advance_hours(1);
        assert_eq!(
            harness.current_timestamp(),
            initial_time + 100 + SECONDS_PER_HOUR
        );
    }

    #[test]
    fn test_token_balances() {
        let harness = TestHarness::new();

        assert_eq!(harness.balance(&harness.accounts.bidder_a), DEFAULT_USER_BALANCE);
        assert_eq!(harness.balance(&harness.accounts.attacker), DEFAULT_USER_BALANCE);
        assert_eq!(harness.balance(&harness.accounts.beneficiary), 0);
    }

    #[test]
    fn test_start_opens_first_auction() {
        let harness = TestHarness::new();

        let auction = harness.start();
        assert_eq!(auction.token_id, 1);
        assert_eq!(auction.end_time, harness.current_timestamp() + DURATION);
    }
}
