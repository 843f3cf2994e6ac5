//! # Core Domain Entities
//!
//! Types shared by every crate that takes part in account authentication.
//!
//! ## Clusters
//!
//! - **Identity**: `AccountAddress`, `CallerId`, `ExecutionContext`
//! - **Encoding**: `Any` (self-describing typed value)

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Length in bytes of an account address.
pub const ADDRESS_LEN: usize = 20;

/// Raw 20-byte account address.
///
/// The string form used inside sign-bytes is produced by an address codec,
/// never by this type's `Display` impl, which is for logs only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct AccountAddress(pub [u8; ADDRESS_LEN]);

impl AccountAddress {
    /// Creates an address from raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for AccountAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")?;
        for byte in &self.0[ADDRESS_LEN - 2..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Identity of whoever invoked an account operation.
///
/// This is the capability carried in every [`ExecutionContext`]; it is set by
/// the dispatcher and cannot be forged by message payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallerId {
    /// A named runtime module (e.g. the accounts module).
    Module(String),
    /// Another account, or the account itself.
    Account(AccountAddress),
}

impl CallerId {
    /// Shorthand for a module caller.
    pub fn module(name: impl Into<String>) -> Self {
        Self::Module(name.into())
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(name) => write!(f, "module:{name}"),
            Self::Account(addr) => write!(f, "account:{addr}"),
        }
    }
}

/// Per-call execution context handed to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// The account being executed.
    pub whoami: AccountAddress,
    /// Who dispatched the call.
    pub sender: CallerId,
}

impl ExecutionContext {
    /// Creates a new context.
    pub fn new(whoami: AccountAddress, sender: CallerId) -> Self {
        Self { whoami, sender }
    }

    /// True when the account is calling itself.
    pub fn is_self_call(&self) -> bool {
        self.sender == CallerId::Account(self.whoami)
    }
}

// =============================================================================
// CLUSTER B: ENCODING
// =============================================================================

/// A self-describing typed value: a type URL plus its encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Any {
    /// Type URL identifying how `value` is encoded.
    pub type_url: String,
    /// Encoded value.
    pub value: Vec<u8>,
}

impl Any {
    /// Packs raw bytes under the given type URL.
    pub fn new(type_url: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            type_url: type_url.into(),
            value: value.into(),
        }
    }
}
