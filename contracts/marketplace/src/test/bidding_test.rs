use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::errors::Error;
use crate::test::{advance_time, fund, mint_and_approve, setup_test};
use crate::AUCTION_DURATION;

// ============================================================================
// STARTING AN AUCTION
// ============================================================================

#[test]
fn test_start_auction() {
    let (env, market, registry, seller, _, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);

    market.start_auction(&seller, &1);

    // Custody is escrowed with the marketplace
    assert_eq!(registry.owner_of(&1), market.address);

    let auction = market.get_auction(&1);
    assert_eq!(auction.seller, seller);
    assert!(auction.active);
    assert_eq!(auction.start_time, env.ledger().timestamp());
    assert_eq!(auction.highest_bid, 0);
    assert_eq!(auction.highest_bidder, None);
    assert_eq!(auction.bid_count, 0);
}

#[test]
fn test_start_auction_not_owner_fails() {
    let (_env, market, registry, seller, buyer, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);

    let result = market.try_start_auction(&buyer, &1);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_start_auction_not_approved_fails() {
    let (_env, market, registry, seller, _, _) = setup_test();
    registry.mint(&seller, &1);

    let result = market.try_start_auction(&seller, &1);
    assert_eq!(result, Err(Ok(Error::NotApproved)));
}

#[test]
fn test_start_auction_already_active_fails() {
    let (_env, market, registry, seller, _, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    let result = market.try_start_auction(&seller, &1);
    assert_eq!(result, Err(Ok(Error::AuctionAlreadyActive)));
}

#[test]
fn test_start_auction_while_listed_fails() {
    let (_env, market, registry, seller, _, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.list_item(&seller, &1, &1000);

    let result = market.try_start_auction(&seller, &1);
    assert_eq!(result, Err(Ok(Error::ItemListed)));
}

// ============================================================================
// BIDDING
// ============================================================================

#[test]
fn test_place_bid() {
    let (_env, market, registry, seller, buyer, token) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    let buyer_before = token.balance(&buyer);
    market.place_bid(&buyer, &1, &1000);

    let auction = market.get_auction(&1);
    assert_eq!(auction.highest_bid, 1000);
    assert_eq!(auction.highest_bidder, Some(buyer.clone()));
    assert_eq!(auction.bid_count, 1);

    // The bid sits in marketplace escrow
    assert_eq!(token.balance(&buyer), buyer_before - 1000);
    assert_eq!(token.balance(&market.address), 1000);
}

#[test]
fn test_bid_refunds_displaced_bidder() {
    let (env, market, registry, seller, first_bidder, token) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    let second_bidder = Address::generate(&env);
    fund(&env, &token.address, &second_bidder, 10_000);

    let first_before = token.balance(&first_bidder);
    market.place_bid(&first_bidder, &1, &1000);
    market.place_bid(&second_bidder, &1, &2000);

    // Displaced bidder got back exactly their bid
    assert_eq!(token.balance(&first_bidder), first_before);
    // Only the leading bid remains escrowed
    assert_eq!(token.balance(&market.address), 2000);

    let auction = market.get_auction(&1);
    assert_eq!(auction.highest_bid, 2000);
    assert_eq!(auction.highest_bidder, Some(second_bidder));
    assert_eq!(auction.bid_count, 2);
}

#[test]
fn test_equal_bid_rejected() {
    let (env, market, registry, seller, buyer, token) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    let rival = Address::generate(&env);
    fund(&env, &token.address, &rival, 10_000);

    market.place_bid(&buyer, &1, &1000);

    let result = market.try_place_bid(&rival, &1, &1000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_lower_bid_rejected() {
    let (env, market, registry, seller, buyer, token) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    let rival = Address::generate(&env);
    fund(&env, &token.address, &rival, 10_000);

    market.place_bid(&buyer, &1, &2000);

    let result = market.try_place_bid(&rival, &1, &1000);
    assert_eq!(result, Err(Ok(Error::BidTooLow)));
}

#[test]
fn test_bid_without_auction_fails() {
    let (_env, market, registry, seller, buyer, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);

    let result = market.try_place_bid(&buyer, &1, &1000);
    assert_eq!(result, Err(Ok(Error::AuctionInactive)));
}

#[test]
fn test_bid_after_end_fails() {
    let (env, market, registry, seller, buyer, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    advance_time(&env, AUCTION_DURATION + 1);

    let result = market.try_place_bid(&buyer, &1, &1000);
    assert_eq!(result, Err(Ok(Error::AuctionEnded)));
}

#[test]
fn test_bid_at_exact_end_boundary_fails() {
    let (env, market, registry, seller, buyer, _) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    // The auction is over exactly at start_time + duration
    advance_time(&env, AUCTION_DURATION);

    let result = market.try_place_bid(&buyer, &1, &1000);
    assert_eq!(result, Err(Ok(Error::AuctionEnded)));
}

#[test]
fn test_bid_sequence_strictly_increasing() {
    let (env, market, registry, seller, first, token) = setup_test();
    mint_and_approve(&registry, &market, &seller, 1);
    market.start_auction(&seller, &1);

    let second = Address::generate(&env);
    fund(&env, &token.address, &second, 10_000);

    market.place_bid(&first, &1, &1000);
    market.place_bid(&second, &1, &2000);
    market.place_bid(&first, &1, &3000);

    let auction = market.get_auction(&1);
    assert_eq!(auction.highest_bid, 3000);
    assert_eq!(auction.highest_bidder, Some(first.clone()));
    assert_eq!(auction.bid_count, 3);

    // All displaced bids refunded, only the leading one escrowed
    assert_eq!(token.balance(&market.address), 3000);
    assert_eq!(token.balance(&second), 10_000);
}
