//! Lifecycle events published by the auction house

use crate::Auction;
use shared_utils::Events;
use soroban_sdk::{Address, Env, Symbol};

pub fn auction_created(e: &Env, auction: &Auction) {
    Events::emit_for_token(
        e,
        "AuctionCreated",
        auction.token_id,
        (auction.start_time, auction.end_time),
    );
}

pub fn auction_bid(e: &Env, token_id: u32, bidder: &Address, value: i128, extended: bool) {
    Events::emit_for_token(e, "AuctionBid", token_id, (bidder.clone(), value, extended));
}

pub fn auction_extended(e: &Env, token_id: u32, end_time: u64) {
    Events::emit_for_token(e, "AuctionExtended", token_id, end_time);
}

/// `winner` is `None` when the token was burned for lack of bids
pub fn auction_settled(e: &Env, token_id: u32, winner: Option<Address>, amount: i128) {
    Events::emit_for_token(e, "AuctionSettled", token_id, (winner, amount));
}

pub fn payment_credited(e: &Env, recipient: &Address, amount: i128) {
    Events::emit_for_account(e, "PaymentCredited", recipient, amount);
}

pub fn time_buffer_updated(e: &Env, time_buffer: u64) {
    Events::emit(e, Symbol::new(e, "TimeBufferUpdated"), time_buffer);
}

pub fn reserve_price_updated(e: &Env, reserve_price: i128) {
    Events::emit(e, Symbol::new(e, "ReservePriceUpdated"), reserve_price);
}

pub fn min_bid_increment_updated(e: &Env, percentage: u32) {
    Events::emit(e, Symbol::new(e, "MinBidIncrementUpdated"), percentage);
}
