//! Refund Delivery Tests
//!
//! An outbid bidder is paid back in the payment asset. When that transfer
//! cannot land, the amount is credited in the wrapped asset instead and the
//! next bid still goes through.

use crate::harness::{TestHarness, MAX_BID_CPU_INSTRUCTIONS, RESERVE_PRICE};
use soroban_sdk::{testutils::Address as _, Address};

/// Test: A bids the reserve, B doubles it, A is made whole
#[test]
fn test_refund_returns_previous_bid() {
    let harness = TestHarness::new();
    let bidder_a = &harness.accounts.bidder_a;
    harness.start();

    harness.bid(bidder_a, RESERVE_PRICE);
    let balance_after_own_bid = harness.balance(bidder_a);

    harness.env.budget().reset_default();
    harness.bid(&harness.accounts.bidder_b, RESERVE_PRICE * 2);
    assert!(harness.env.budget().cpu_instruction_cost() <= MAX_BID_CPU_INSTRUCTIONS);

    assert_eq!(
        harness.balance(bidder_a),
        balance_after_own_bid + RESERVE_PRICE
    );
    assert_eq!(harness.wrapped().balance(bidder_a), 0);
}

/// Test: a bidder that cannot receive the refund does not block the next bid
#[test]
fn test_griefing_bidder_is_credited_in_wrapped_asset() {
    let harness = TestHarness::new();
    let attacker = &harness.accounts.attacker;
    let bidder = &harness.accounts.bidder_b;
    harness.start();

    harness.bid(attacker, RESERVE_PRICE);
    harness.block_recipient(attacker);
    let attacker_balance = harness.balance(attacker);

    harness.env.budget().reset_default();
    harness.bid(bidder, RESERVE_PRICE * 2);
    assert!(harness.env.budget().cpu_instruction_cost() <= MAX_BID_CPU_INSTRUCTIONS);

    let auction = harness.current_auction();
    assert_eq!(auction.highest_bidder, Some(bidder.clone()));
    assert_eq!(auction.highest_bid, RESERVE_PRICE * 2);

    assert_eq!(harness.balance(attacker), attacker_balance);
    assert_eq!(harness.wrapped().balance(attacker), RESERVE_PRICE);
    assert_eq!(harness.wrapped().total_supply(), RESERVE_PRICE);
    assert_eq!(
        harness.balance(&harness.contracts.wrapped_asset),
        RESERVE_PRICE
    );
}

/// Test: the credited bidder withdraws to an address that can receive
#[test]
fn test_credited_bidder_withdraws_elsewhere() {
    let harness = TestHarness::new();
    let attacker = &harness.accounts.attacker;
    let fresh = Address::generate(&harness.env);
    harness.start();

    harness.bid(attacker, RESERVE_PRICE);
    harness.block_recipient(attacker);
    harness.bid(&harness.accounts.bidder_b, RESERVE_PRICE * 2);

    harness.wrapped().withdraw(attacker, &fresh, &RESERVE_PRICE);

    assert_eq!(harness.balance(&fresh), RESERVE_PRICE);
    assert_eq!(harness.wrapped().balance(attacker), 0);
    assert_eq!(harness.wrapped().total_supply(), 0);
}

/// Test: the house escrows only the live highest bid through a bid war
#[test]
fn test_escrow_tracks_highest_bid() {
    let harness = TestHarness::new();
    harness.start();
    let bidders = [
        harness.accounts.bidder_a.clone(),
        harness.accounts.bidder_b.clone(),
        harness.accounts.attacker.clone(),
    ];

    for round in 0..12 {
        let amount = harness.house().minimum_bid();
        harness.bid(&bidders[round % bidders.len()], amount);
        assert_eq!(harness.balance(&harness.contracts.auction_house), amount);
    }
}

/// Test: proceeds owed to a beneficiary that cannot receive are credited
#[test]
fn test_blocked_beneficiary_is_credited_at_settlement() {
    let harness = TestHarness::new();
    let beneficiary = &harness.accounts.beneficiary;
    harness.start();

    harness.bid(&harness.accounts.bidder_a, RESERVE_PRICE * 3);
    harness.payment_admin_client().mint(beneficiary, &1);
    harness.block_recipient(beneficiary);

    harness.settle_after_expiry();

    assert_eq!(harness.balance(beneficiary), 1);
    assert_eq!(harness.wrapped().balance(beneficiary), RESERVE_PRICE * 3);
    assert_eq!(harness.current_auction().token_id, 2);
}
