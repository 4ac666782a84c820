use soroban_sdk::contracterror;

/// Error codes for the marketplace contract.
///
/// Grouped by failure class: validation (1-9), authorization (10-19),
/// state (20-39), payment (40+). Every error aborts the whole invocation;
/// the host rolls back any storage write or transfer made before the
/// failure point.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Listing price must be greater than zero
    InvalidPrice = 1,
    /// Bid does not exceed the current highest bid
    BidTooLow = 2,
    /// No item record exists for this token
    ItemNotFound = 3,
    /// No auction record exists for this token
    AuctionNotFound = 4,

    /// Caller is not the recognized owner of the item
    NotOwner = 10,
    /// Caller did not start the auction
    NotAuctionCreator = 11,
    /// Marketplace lacks transfer authorization from the registry
    NotApproved = 12,

    /// Contract has already been initialized
    AlreadyInitialized = 20,
    /// Contract has not been initialized
    NotInitialized = 21,
    /// Item is not listed
    NotListed = 22,
    /// Item is not for sale
    NotForSale = 23,
    /// Item is listed for direct sale
    ItemListed = 24,
    /// An auction is already active for this token
    AuctionAlreadyActive = 25,
    /// No active auction exists for this token
    AuctionInactive = 26,
    /// Auction duration has elapsed
    AuctionEnded = 27,
    /// Auction duration has not elapsed yet
    AuctionNotOver = 28,
    /// Auction already has bids
    AuctionHasBids = 29,

    /// Attached funds below the required amount
    InsufficientPayment = 40,
}
