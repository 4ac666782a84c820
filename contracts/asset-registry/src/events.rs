use soroban_sdk::{contractevent, Address};

/// Event emitted when an asset is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEventData {
    #[topic]
    pub token_id: u64,
    pub to: Address,
}

/// Event emitted when custody of an asset moves
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEventData {
    #[topic]
    pub token_id: u64,
    pub from: Address,
    pub to: Address,
}

/// Event emitted when a single-asset approval is granted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalSetEventData {
    #[topic]
    pub token_id: u64,
    pub owner: Address,
    pub approved: Address,
}

/// Event emitted when a blanket operator approval changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorSetEventData {
    #[topic]
    pub owner: Address,
    pub operator: Address,
    pub approved: bool,
}
