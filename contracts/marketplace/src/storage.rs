use soroban_sdk::{Address, Env};

use crate::types::{
    Auction, Item, StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIGURATION STORAGE
// ============================================================================

/// Get the bound asset registry address
pub fn get_registry(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::Registry)
}

/// Bind the asset registry address
pub fn set_registry(e: &Env, registry: &Address) {
    e.storage().instance().set(&StorageKey::Registry, registry);
}

/// Get the bound payment token address
pub fn get_payment_token(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::PaymentToken)
}

/// Bind the payment token address
pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&StorageKey::PaymentToken, token);
}

/// Check if the collaborator addresses have been bound
pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Registry)
}

// ============================================================================
// ITEM STORAGE
// ============================================================================

/// Get the item record for a token
pub fn get_item(e: &Env, token_id: u64) -> Option<Item> {
    let key = StorageKey::Item(token_id);
    let item = e.storage().persistent().get::<_, Item>(&key);
    if item.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    item
}

/// Set the item record for a token
pub fn set_item(e: &Env, token_id: u64, item: &Item) {
    let key = StorageKey::Item(token_id);
    e.storage().persistent().set(&key, item);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

/// Get the auction record for a token
pub fn get_auction(e: &Env, token_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(token_id);
    let auction = e.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Set the auction record for a token
pub fn set_auction(e: &Env, token_id: u64, auction: &Auction) {
    let key = StorageKey::Auction(token_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Check whether an active auction exists for a token
pub fn has_active_auction(e: &Env, token_id: u64) -> bool {
    get_auction(e, token_id).is_some_and(|a| a.active)
}
