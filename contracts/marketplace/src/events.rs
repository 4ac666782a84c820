use soroban_sdk::{contractevent, Address};

/// Event emitted when an item is listed for direct sale
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListedEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
    pub price: i128,
}

/// Event emitted when a listing is canceled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCanceledEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
}

/// Event emitted when an item is sold at its list price
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSoldEventData {
    #[topic]
    pub token_id: u64,
    pub buyer: Address,
    pub seller: Address,
    pub price: i128,
}

/// Event emitted when an auction starts
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
    pub start_time: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub token_id: u64,
    pub bidder: Address,
    pub amount: i128,
    pub bid_count: u32,
}

/// Event emitted when an auction is finalized.
///
/// `winner` is set only when a sale happened (two or more bids); otherwise
/// the asset went back to the seller and `amount` is 0.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionFinishedEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event emitted when an auction is canceled before any bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCanceledEventData {
    #[topic]
    pub token_id: u64,
    pub seller: Address,
}
