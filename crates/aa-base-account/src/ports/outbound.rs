//! # Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators the base account depends on. All calls are synchronous
//! and all-or-nothing.

use shared_crypto::Secp256k1PublicKey;
use shared_types::{AccountAddress, CollaboratorError, ExecutionContext, StoreError};

/// Source of block header information.
pub trait HeaderService: Send + Sync {
    /// Chain id of the chain currently executing.
    fn get_chain_id(&self) -> Result<String, CollaboratorError>;
}

/// Registry assigning account numbers.
pub trait AccountRegistry: Send + Sync {
    /// Account number for `address`, or `None` if the account is unknown.
    fn get_account_number(&self, address: &AccountAddress)
        -> Result<Option<u64>, CollaboratorError>;
}

/// Decides which callers may drive privileged account operations.
pub trait CallerAuthority: Send + Sync {
    fn is_privileged_caller(&self, ctx: &ExecutionContext) -> bool;
}

/// Converts between address bytes and their string form.
pub trait AddressCodec: Send + Sync {
    fn bytes_to_string(&self, address: &AccountAddress) -> Result<String, CollaboratorError>;
    fn string_to_bytes(&self, text: &str) -> Result<AccountAddress, CollaboratorError>;
}

/// Per-account state: the public key and the sequence counter.
///
/// The store is the only place either value is mutated.
pub trait AccountStateStore: Send + Sync {
    /// Create the account with `pub_key` and sequence 0.
    ///
    /// Fails with `StoreError::AlreadyExists` if the account exists. An
    /// existing sequence is never reset.
    fn initialize(
        &self,
        account: &AccountAddress,
        pub_key: Secp256k1PublicKey,
    ) -> Result<(), StoreError>;

    /// Atomically return the current sequence and store its successor.
    ///
    /// Two concurrent callers never observe the same value. Fails with
    /// `StoreError::NotFound`, creating nothing, for unknown accounts.
    fn fetch_and_increment_sequence(&self, account: &AccountAddress) -> Result<u64, StoreError>;

    /// The next sequence to be consumed (0 for unknown accounts).
    fn current_sequence(&self, account: &AccountAddress) -> Result<u64, StoreError>;

    fn public_key(&self, account: &AccountAddress)
        -> Result<Option<Secp256k1PublicKey>, StoreError>;

    /// Replace the key of an existing account.
    ///
    /// Fails with `StoreError::NotFound` if the account has no key.
    fn set_public_key(
        &self,
        account: &AccountAddress,
        pub_key: Secp256k1PublicKey,
    ) -> Result<(), StoreError>;
}
