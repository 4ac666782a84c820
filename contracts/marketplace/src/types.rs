use soroban_sdk::{contracttype, Address};

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Address of the asset registry contract
    Registry,
    /// Address of the token used for payments
    PaymentToken,
    /// Item record by token id
    Item(u64),
    /// Auction record by token id
    Auction(u64),
}

/// Marketplace bookkeeping for a single asset.
///
/// `owner` is the seller-of-record recognized by the marketplace. While an
/// auction is running it keeps pointing at the seller even though registry
/// custody sits with the marketplace.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    /// Owner recognized by the marketplace
    pub owner: Address,
    /// Fixed-sale price; 0 means not listed
    pub price: i128,
}

/// State of one timed auction.
///
/// A record is created by `start_auction` and becomes permanently inactive
/// on finish or cancel; a later auction for the same token overwrites it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Address that started the auction
    pub seller: Address,
    /// False once finished or canceled
    pub active: bool,
    /// Ledger timestamp at start
    pub start_time: u64,
    /// Highest accepted bid, 0 if none
    pub highest_bid: i128,
    /// Author of the highest bid
    pub highest_bidder: Option<Address>,
    /// Number of accepted bids since the start
    pub bid_count: u32,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
