use soroban_sdk::contracterror;

/// Error codes for the asset registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Minter has already been bound
    MinterAlreadySet = 3,
    /// No minter has been bound yet
    MinterNotSet = 4,
    /// An asset with this id already exists
    TokenAlreadyExists = 5,
    /// No asset with this id exists
    TokenNotFound = 6,
    /// `from` is not the current holder of the asset
    NotTokenOwner = 7,
    /// Spender is neither holder, approved, nor operator
    NotAuthorized = 8,
}
