use soroban_sdk::{contractclient, Address, Env};

/// Capability interface of the external asset-ownership ledger.
///
/// The marketplace only ever talks to the registry through this client, so
/// any contract exporting these functions can back it. The workspace ships
/// `asset-registry` as the reference implementation.
#[contractclient(name = "RegistryClient")]
pub trait AssetLedger {
    /// Current holder of the asset.
    fn owner_of(env: Env, token_id: u64) -> Address;

    /// Move custody of `token_id` from `from` to `to`.
    ///
    /// `spender` must be the holder, the approved address for the asset,
    /// or a blanket operator of the holder. Invoker authorization covers
    /// the marketplace when it spends its own approvals.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);

    /// Address approved for this single asset, if any.
    fn get_approved(env: Env, token_id: u64) -> Option<Address>;

    /// Whether `operator` may transfer any asset held by `owner`.
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
}
