#![no_std]

mod errors;
mod events;
pub mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use crate::errors::Error;
use crate::events::*;
use crate::registry::RegistryClient;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Fixed auction window: 3 days in seconds. An auction may be finalized at
/// `start_time + AUCTION_DURATION` and thereafter.
pub const AUCTION_DURATION: u64 = 3 * 24 * 60 * 60;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Contract
// ============================================================================

/// NFT Marketplace Smart Contract
///
/// A marketplace for uniquely-identified assets tracked by an external
/// registry, with two sale modes per asset:
/// - fixed-price direct sale
/// - timed auction with bid escrow and refund of displaced bidders
///
/// The two modes are mutually exclusive per asset. Custody of an auctioned
/// asset is escrowed with this contract for the life of the auction, and
/// every operation either commits all of its fund and custody movements or
/// none of them.
#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Bind the external collaborators. One-shot.
    ///
    /// # Arguments
    /// * `asset_registry` - Contract tracking asset custody and approvals
    /// * `payment_token` - Token every payment, escrow and refund moves in
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, asset_registry: Address, payment_token: Address) -> Result<(), Error> {
        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        set_registry(e, &asset_registry);
        set_payment_token(e, &payment_token);
        Self::extend_instance_ttl(e);

        Ok(())
    }

    // ========================================================================
    // DIRECT SALE
    // ========================================================================

    /// List an item at a fixed price.
    ///
    /// The first listing-related operation for a token initializes its item
    /// record from the registry holder. Re-listing an already listed item
    /// simply overwrites the price.
    ///
    /// # Errors
    /// * `Error::NotOwner` - Caller is not the recognized owner
    /// * `Error::InvalidPrice` - Price is not positive
    /// * `Error::AuctionAlreadyActive` - Item is under an active auction
    /// * `Error::NotApproved` - Marketplace cannot transfer the asset
    pub fn list_item(e: &Env, seller: Address, token_id: u64, price: i128) -> Result<(), Error> {
        seller.require_auth();

        let registry = get_registry(e).ok_or(Error::NotInitialized)?;
        let reg = RegistryClient::new(e, &registry);

        let mut item = match get_item(e, token_id) {
            Some(item) => {
                if item.owner != seller {
                    return Err(Error::NotOwner);
                }
                if has_active_auction(e, token_id) {
                    return Err(Error::AuctionAlreadyActive);
                }
                item
            }
            None => {
                if reg.owner_of(&token_id) != seller {
                    return Err(Error::NotOwner);
                }
                Item {
                    owner: seller.clone(),
                    price: 0,
                }
            }
        };

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        Self::require_transfer_approval(e, &reg, &seller, token_id)?;

        item.price = price;
        set_item(e, token_id, &item);

        ItemListedEventData {
            token_id,
            seller,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Take a listed item off direct sale.
    ///
    /// # Errors
    /// * `Error::NotOwner` - Caller is not the recognized owner
    /// * `Error::NotListed` - Item has no positive list price
    pub fn cancel_listing(e: &Env, seller: Address, token_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let mut item = get_item(e, token_id).ok_or(Error::NotListed)?;

        if item.owner != seller {
            return Err(Error::NotOwner);
        }
        if item.price == 0 {
            return Err(Error::NotListed);
        }

        item.price = 0;
        set_item(e, token_id, &item);

        ListingCanceledEventData { token_id, seller }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Buy a listed item at its list price.
    ///
    /// `amount` is the payment the buyer attaches; only the list price is
    /// ever collected from the buyer, so an excess never leaves their
    /// balance. Payment, custody transfer and record update commit as one
    /// unit.
    ///
    /// # Errors
    /// * `Error::NotForSale` - Item has no positive list price
    /// * `Error::InsufficientPayment` - `amount` is below the list price
    pub fn buy_item(e: &Env, buyer: Address, token_id: u64, amount: i128) -> Result<(), Error> {
        buyer.require_auth();

        let registry = get_registry(e).ok_or(Error::NotInitialized)?;
        let payment_token = get_payment_token(e).ok_or(Error::NotInitialized)?;

        let mut item = get_item(e, token_id).ok_or(Error::NotForSale)?;
        if item.price == 0 {
            return Err(Error::NotForSale);
        }
        if amount < item.price {
            return Err(Error::InsufficientPayment);
        }

        let price = item.price;
        let seller = item.owner.clone();

        // State first, transfers after
        item.owner = buyer.clone();
        item.price = 0;
        set_item(e, token_id, &item);

        token::TokenClient::new(e, &payment_token).transfer(&buyer, &seller, &price);
        RegistryClient::new(e, &registry).transfer_from(
            &e.current_contract_address(),
            &seller,
            &buyer,
            &token_id,
        );

        ItemSoldEventData {
            token_id,
            buyer,
            seller,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // AUCTION
    // ========================================================================

    /// Start a timed auction and escrow the asset with the marketplace.
    ///
    /// # Errors
    /// * `Error::NotOwner` - Caller is not the recognized owner
    /// * `Error::NotApproved` - Marketplace cannot transfer the asset
    /// * `Error::AuctionAlreadyActive` - An auction is already running
    /// * `Error::ItemListed` - Item must be taken off direct sale first
    pub fn start_auction(e: &Env, seller: Address, token_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let registry = get_registry(e).ok_or(Error::NotInitialized)?;
        let reg = RegistryClient::new(e, &registry);

        let item = match get_item(e, token_id) {
            Some(item) => {
                if item.owner != seller {
                    return Err(Error::NotOwner);
                }
                item
            }
            None => {
                if reg.owner_of(&token_id) != seller {
                    return Err(Error::NotOwner);
                }
                Item {
                    owner: seller.clone(),
                    price: 0,
                }
            }
        };

        Self::require_transfer_approval(e, &reg, &seller, token_id)?;

        if has_active_auction(e, token_id) {
            return Err(Error::AuctionAlreadyActive);
        }
        if item.price > 0 {
            return Err(Error::ItemListed);
        }

        let start_time = e.ledger().timestamp();
        let auction = Auction {
            seller: seller.clone(),
            active: true,
            start_time,
            highest_bid: 0,
            highest_bidder: None,
            bid_count: 0,
        };

        set_item(e, token_id, &item);
        set_auction(e, token_id, &auction);

        // Escrow custody with the marketplace for the life of the auction
        reg.transfer_from(
            &e.current_contract_address(),
            &seller,
            &e.current_contract_address(),
            &token_id,
        );

        AuctionStartedEventData {
            token_id,
            seller,
            start_time,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Place a bid on an active auction.
    ///
    /// The bid must strictly exceed the current highest bid; an equal bid
    /// is rejected. The displaced bidder, if any, is refunded their full
    /// bid in the same invocation. The auction record is saved before any
    /// token moves.
    ///
    /// # Errors
    /// * `Error::AuctionInactive` - No active auction for this token
    /// * `Error::AuctionEnded` - The 3-day window has elapsed
    /// * `Error::BidTooLow` - Bid does not strictly exceed the highest bid
    pub fn place_bid(e: &Env, bidder: Address, token_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let payment_token = get_payment_token(e).ok_or(Error::NotInitialized)?;

        let mut auction = get_auction(e, token_id).ok_or(Error::AuctionInactive)?;
        if !auction.active {
            return Err(Error::AuctionInactive);
        }
        if e.ledger().timestamp() >= auction.start_time + AUCTION_DURATION {
            return Err(Error::AuctionEnded);
        }
        if amount <= 0 || amount <= auction.highest_bid {
            return Err(Error::BidTooLow);
        }

        let displaced = auction.highest_bidder.clone();
        let displaced_bid = auction.highest_bid;

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        auction.bid_count += 1;
        set_auction(e, token_id, &auction);

        let payment = token::TokenClient::new(e, &payment_token);
        payment.transfer(&bidder, &e.current_contract_address(), &amount);
        if let Some(prev_bidder) = displaced {
            payment.transfer(&e.current_contract_address(), &prev_bidder, &displaced_bid);
        }

        BidPlacedEventData {
            token_id,
            bidder,
            amount,
            bid_count: auction.bid_count,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Finalize an auction whose window has elapsed.
    ///
    /// Callable by anyone: settlement does not depend on either
    /// counterparty showing up. With two or more bids the asset goes to
    /// the highest bidder and the seller is paid the highest bid; with
    /// fewer the asset returns to the seller and a sole bidder is
    /// refunded in full.
    ///
    /// # Errors
    /// * `Error::AuctionInactive` - No active auction for this token
    /// * `Error::AuctionNotOver` - The 3-day window has not elapsed
    pub fn finish_auction(e: &Env, token_id: u64) -> Result<(), Error> {
        let registry = get_registry(e).ok_or(Error::NotInitialized)?;
        let payment_token = get_payment_token(e).ok_or(Error::NotInitialized)?;

        let mut auction = get_auction(e, token_id).ok_or(Error::AuctionInactive)?;
        if !auction.active {
            return Err(Error::AuctionInactive);
        }
        if e.ledger().timestamp() < auction.start_time + AUCTION_DURATION {
            return Err(Error::AuctionNotOver);
        }

        auction.active = false;
        set_auction(e, token_id, &auction);

        let reg = RegistryClient::new(e, &registry);
        let payment = token::TokenClient::new(e, &payment_token);
        let marketplace = e.current_contract_address();

        let sold = auction.bid_count >= 2;
        let mut winner = None;

        if sold {
            if let Some(highest_bidder) = auction.highest_bidder.clone() {
                reg.transfer_from(&marketplace, &marketplace, &highest_bidder, &token_id);
                payment.transfer(&marketplace, &auction.seller, &auction.highest_bid);

                if let Some(mut item) = get_item(e, token_id) {
                    item.owner = highest_bidder.clone();
                    set_item(e, token_id, &item);
                }
                winner = Some(highest_bidder);
            }
        } else {
            reg.transfer_from(&marketplace, &marketplace, &auction.seller, &token_id);
            if let Some(sole_bidder) = auction.highest_bidder.clone() {
                payment.transfer(&marketplace, &sole_bidder, &auction.highest_bid);
            }
        }

        AuctionFinishedEventData {
            token_id,
            seller: auction.seller,
            amount: if sold { auction.highest_bid } else { 0 },
            winner,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Cancel an auction that has not received any bid.
    ///
    /// # Errors
    /// * `Error::AuctionInactive` - No active auction for this token
    /// * `Error::NotAuctionCreator` - Caller did not start the auction
    /// * `Error::AuctionEnded` - The window elapsed; use `finish_auction`
    /// * `Error::AuctionHasBids` - A bid has already been accepted
    pub fn cancel_auction(e: &Env, seller: Address, token_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let registry = get_registry(e).ok_or(Error::NotInitialized)?;

        let mut auction = get_auction(e, token_id).ok_or(Error::AuctionInactive)?;
        if !auction.active {
            return Err(Error::AuctionInactive);
        }
        if auction.seller != seller {
            return Err(Error::NotAuctionCreator);
        }
        if e.ledger().timestamp() >= auction.start_time + AUCTION_DURATION {
            return Err(Error::AuctionEnded);
        }
        if auction.bid_count > 0 {
            return Err(Error::AuctionHasBids);
        }

        auction.active = false;
        set_auction(e, token_id, &auction);

        RegistryClient::new(e, &registry).transfer_from(
            &e.current_contract_address(),
            &e.current_contract_address(),
            &seller,
            &token_id,
        );

        AuctionCanceledEventData { token_id, seller }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Get the item record for a token
    pub fn get_item(e: &Env, token_id: u64) -> Result<Item, Error> {
        get_item(e, token_id).ok_or(Error::ItemNotFound)
    }

    /// Get the auction record for a token, active or not
    pub fn get_auction(e: &Env, token_id: u64) -> Result<Auction, Error> {
        get_auction(e, token_id).ok_or(Error::AuctionNotFound)
    }

    /// Get the bound asset registry address
    pub fn get_registry(e: &Env) -> Result<Address, Error> {
        get_registry(e).ok_or(Error::NotInitialized)
    }

    /// Get the bound payment token address
    pub fn get_payment_token(e: &Env) -> Result<Address, Error> {
        get_payment_token(e).ok_or(Error::NotInitialized)
    }

    /// Fixed auction window in seconds
    pub fn auction_duration(_e: &Env) -> u64 {
        AUCTION_DURATION
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Require that the registry lets the marketplace move `token_id` on
    /// behalf of `holder`, via single-asset approval or blanket operator
    /// approval.
    fn require_transfer_approval(
        e: &Env,
        reg: &RegistryClient,
        holder: &Address,
        token_id: u64,
    ) -> Result<(), Error> {
        let marketplace = e.current_contract_address();
        if reg.get_approved(&token_id) == Some(marketplace.clone())
            || reg.is_approved_for_all(holder, &marketplace)
        {
            Ok(())
        } else {
            Err(Error::NotApproved)
        }
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
