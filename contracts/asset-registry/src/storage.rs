use soroban_sdk::{Address, Env};

use crate::types::{DataKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD};

// ============================================================================
// ADMIN / MINTER STORAGE
// ============================================================================

pub fn has_admin(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn has_minter(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Minter)
}

pub fn get_minter(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::Minter)
}

pub fn set_minter(e: &Env, minter: &Address) {
    e.storage().instance().set(&DataKey::Minter, minter);
}

// ============================================================================
// HOLDER STORAGE
// ============================================================================

/// Get the current holder of an asset
pub fn get_holder(e: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Holder(token_id);
    let holder = e.storage().persistent().get::<_, Address>(&key);
    if holder.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    holder
}

/// Set the current holder of an asset
pub fn set_holder(e: &Env, token_id: u64, holder: &Address) {
    let key = DataKey::Holder(token_id);
    e.storage().persistent().set(&key, holder);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Check if an asset exists
pub fn token_exists(e: &Env, token_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Holder(token_id))
}

// ============================================================================
// APPROVAL STORAGE
// ============================================================================

/// Get the single-asset approval, if any
pub fn get_approved(e: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Approved(token_id);
    let approved = e.storage().persistent().get::<_, Address>(&key);
    if approved.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    approved
}

/// Set the single-asset approval
pub fn set_approved(e: &Env, token_id: u64, approved: &Address) {
    let key = DataKey::Approved(token_id);
    e.storage().persistent().set(&key, approved);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear the single-asset approval
pub fn remove_approved(e: &Env, token_id: u64) {
    e.storage().persistent().remove(&DataKey::Approved(token_id));
}

/// Check whether `operator` holds a blanket approval from `owner`
pub fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    e.storage().persistent().get::<_, bool>(&key).unwrap_or(false)
}

/// Grant or revoke a blanket operator approval
pub fn set_operator(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        e.storage().persistent().set(&key, &true);
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    } else {
        e.storage().persistent().remove(&key);
    }
}
