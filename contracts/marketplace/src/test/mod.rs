pub mod bidding_test;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use asset_registry::{AssetRegistry, AssetRegistryClient};

use crate::{Marketplace, MarketplaceClient};

pub fn setup_test() -> (
    Env,
    MarketplaceClient<'static>,
    AssetRegistryClient<'static>,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let registry_id = env.register(AssetRegistry, ());
    let registry = AssetRegistryClient::new(&env, &registry_id);

    let marketplace_id = env.register(Marketplace, ());
    let market = MarketplaceClient::new(&env, &marketplace_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);
    token_admin_client.mint(&seller, &10_000_000);
    token_admin_client.mint(&buyer, &10_000_000);

    registry.initialize(&admin);
    registry.set_minter(&admin);
    market.initialize(&registry_id, &token_address);

    (env, market, registry, seller, buyer, token_client)
}

/// Mint an asset to `owner` and grant the marketplace blanket transfer
/// authorization from them.
pub fn mint_and_approve(
    registry: &AssetRegistryClient,
    market: &MarketplaceClient,
    owner: &Address,
    token_id: u64,
) {
    registry.mint(owner, &token_id);
    registry.set_approval_for_all(owner, &market.address, &true);
}

/// Credit `to` with payment-token balance.
pub fn fund(env: &Env, token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn advance_time(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}
