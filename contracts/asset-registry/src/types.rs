use soroban_sdk::{contracttype, Address};

/// Storage keys for the asset registry contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address set at initialization
    Admin,
    /// Single address allowed to create assets, bound once
    Minter,
    /// Current holder by token id
    Holder(u64),
    /// Single-asset transfer approval by token id
    Approved(u64),
    /// Blanket operator approval (holder, operator)
    Operator(Address, Address),
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
