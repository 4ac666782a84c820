#![no_std]

mod errors;
mod events;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::errors::Error;
use crate::events::*;

/// Asset Registry Smart Contract
///
/// Authoritative store of asset custody and transfer authorization:
/// - Asset creation, restricted to a single minter bound once after setup
/// - Custody lookup and transfer
/// - Single-asset and blanket operator approvals
///
/// The marketplace contract consumes this surface through its capability
/// client; any contract exporting the same functions can stand in for it.
#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the registry.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, admin: Address) -> Result<(), Error> {
        if storage::has_admin(e) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(e, &admin);
        Ok(())
    }

    /// Bind the single address allowed to create assets.
    ///
    /// The binding is one-shot: once a minter is set it can never be
    /// replaced.
    ///
    /// # Errors
    /// * `Error::NotInitialized` - If the registry has no admin yet
    /// * `Error::MinterAlreadySet` - If a minter is already bound
    pub fn set_minter(e: &Env, minter: Address) -> Result<(), Error> {
        let admin = storage::get_admin(e).ok_or(Error::NotInitialized)?;
        admin.require_auth();

        if storage::has_minter(e) {
            return Err(Error::MinterAlreadySet);
        }

        storage::set_minter(e, &minter);
        Ok(())
    }

    /// Get the bound minter address
    pub fn get_minter(e: &Env) -> Result<Address, Error> {
        storage::get_minter(e).ok_or(Error::MinterNotSet)
    }

    // ========================================================================
    // ASSET CREATION
    // ========================================================================

    /// Create a new asset held by `to`. Only the bound minter may call.
    ///
    /// # Errors
    /// * `Error::MinterNotSet` - If no minter has been bound
    /// * `Error::TokenAlreadyExists` - If the id is already in use
    pub fn mint(e: &Env, to: Address, token_id: u64) -> Result<(), Error> {
        let minter = storage::get_minter(e).ok_or(Error::MinterNotSet)?;
        minter.require_auth();

        if storage::token_exists(e, token_id) {
            return Err(Error::TokenAlreadyExists);
        }

        storage::set_holder(e, token_id, &to);

        MintedEventData { token_id, to }.publish(e);

        Ok(())
    }

    // ========================================================================
    // CUSTODY
    // ========================================================================

    /// Current holder of an asset
    pub fn owner_of(e: &Env, token_id: u64) -> Result<Address, Error> {
        storage::get_holder(e, token_id).ok_or(Error::TokenNotFound)
    }

    /// Move custody of `token_id` from `from` to `to`.
    ///
    /// `spender` must authorize the call and be the current holder, the
    /// approved address for this asset, or a blanket operator of the
    /// holder. The single-asset approval is cleared on transfer.
    ///
    /// # Errors
    /// * `Error::TokenNotFound` - If the id does not exist
    /// * `Error::NotTokenOwner` - If `from` is not the current holder
    /// * `Error::NotAuthorized` - If `spender` holds no transfer authorization
    pub fn transfer_from(
        e: &Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let holder = storage::get_holder(e, token_id).ok_or(Error::TokenNotFound)?;

        if holder != from {
            return Err(Error::NotTokenOwner);
        }

        if spender != holder
            && storage::get_approved(e, token_id) != Some(spender.clone())
            && !storage::is_operator(e, &holder, &spender)
        {
            return Err(Error::NotAuthorized);
        }

        storage::remove_approved(e, token_id);
        storage::set_holder(e, token_id, &to);

        TransferredEventData { token_id, from, to }.publish(e);

        Ok(())
    }

    // ========================================================================
    // APPROVALS
    // ========================================================================

    /// Grant `approved` transfer authorization over one asset.
    ///
    /// # Errors
    /// * `Error::TokenNotFound` - If the id does not exist
    /// * `Error::NotTokenOwner` - If `owner` is not the current holder
    pub fn approve(
        e: &Env,
        owner: Address,
        approved: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        owner.require_auth();

        let holder = storage::get_holder(e, token_id).ok_or(Error::TokenNotFound)?;

        if holder != owner {
            return Err(Error::NotTokenOwner);
        }

        storage::set_approved(e, token_id, &approved);

        ApprovalSetEventData {
            token_id,
            owner,
            approved,
        }
        .publish(e);

        Ok(())
    }

    /// Address approved for a single asset, if any
    pub fn get_approved(e: &Env, token_id: u64) -> Result<Option<Address>, Error> {
        if !storage::token_exists(e, token_id) {
            return Err(Error::TokenNotFound);
        }
        Ok(storage::get_approved(e, token_id))
    }

    /// Grant or revoke `operator` transfer authorization over every asset
    /// held by `owner`.
    pub fn set_approval_for_all(
        e: &Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        owner.require_auth();

        storage::set_operator(e, &owner, &operator, approved);

        OperatorSetEventData {
            owner,
            operator,
            approved,
        }
        .publish(e);

        Ok(())
    }

    /// Whether `operator` may transfer any asset held by `owner`
    pub fn is_approved_for_all(e: &Env, owner: Address, operator: Address) -> bool {
        storage::is_operator(e, &owner, &operator)
    }
}
