//! # Domain Entities
//!
//! Transaction structures as they travel on the wire, plus the two per-call
//! value objects every sign mode consumes: [`SignerData`] and [`TxData`].

use serde::{Deserialize, Serialize};
use shared_types::Any;

// =============================================================================
// Transaction body
// =============================================================================

/// A token amount.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    /// Decimal string, kept verbatim so sign-bytes never re-format it.
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// The signed payload of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxBody {
    /// Messages to execute, each packed as a typed value.
    pub messages: Vec<Any>,
    pub memo: String,
    /// Block height after which the transaction is invalid (0 = none).
    pub timeout_height: u64,
    pub extension_options: Vec<Any>,
    pub non_critical_extension_options: Vec<Any>,
}

// =============================================================================
// Auth info
// =============================================================================

/// Compact bit array marking which keys of a multisig signed.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompactBitArray {
    pub extra_bits_stored: u32,
    pub elems: Vec<u8>,
}

/// Single-signer mode descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleMode {
    /// Raw sign mode number; unknown values are rejected at resolve time.
    pub mode: i32,
}

/// Multi-signer (composite) mode descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiMode {
    pub bitarray: CompactBitArray,
    pub mode_infos: Vec<ModeInfo>,
}

/// The shape of a mode descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeInfoSum {
    Single(SingleMode),
    Multi(MultiMode),
}

/// Describes how a signer produced its signature.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeInfo {
    pub sum: Option<ModeInfoSum>,
}

impl ModeInfo {
    /// A single-signer descriptor for the given raw mode.
    pub fn single(mode: i32) -> Self {
        Self {
            sum: Some(ModeInfoSum::Single(SingleMode { mode })),
        }
    }

    /// A composite descriptor wrapping the given children.
    pub fn multi(bitarray: CompactBitArray, mode_infos: Vec<ModeInfo>) -> Self {
        Self {
            sum: Some(ModeInfoSum::Multi(MultiMode {
                bitarray,
                mode_infos,
            })),
        }
    }

    /// Whether the descriptor carries any shape at all.
    pub fn is_empty(&self) -> bool {
        self.sum.is_none()
    }
}

/// Per-signer auth metadata.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignerInfo {
    /// Optional public key; accounts that already hold a key ignore it.
    pub public_key: Option<Any>,
    pub mode_info: ModeInfo,
    /// Sequence the signer claims to be signing at.
    pub sequence: u64,
}

/// Fee paid by the transaction.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas_limit: u64,
    pub payer: String,
    pub granter: String,
}

/// Authorization-related part of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthInfo {
    pub signer_infos: Vec<SignerInfo>,
    pub fee: Option<Fee>,
}

// =============================================================================
// Raw and decoded transactions
// =============================================================================

/// A transaction exactly as received: encoded body, encoded auth info and
/// one signature per signer.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTx {
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    pub signatures: Vec<Vec<u8>>,
}

/// Decoded transaction plus the original bytes it was decoded from.
///
/// Sign-bytes are always derived from `body_bytes`/`auth_info_bytes`, never
/// from re-encoding `body`/`auth_info`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxData {
    pub body: TxBody,
    pub auth_info: AuthInfo,
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    /// Always false here; legacy JSON signing requires it.
    pub body_has_unknown_non_criticals: bool,
}

/// Signer-specific inputs to sign-bytes computation.
///
/// Built fresh for every authentication attempt and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerData {
    /// Address string as produced by the address codec.
    pub address: String,
    pub chain_id: String,
    pub account_number: u64,
    /// The sequence consumed by this attempt.
    pub sequence: u64,
    /// Public key as a typed value.
    pub pub_key: Any,
}

/// Document signed in direct mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignDoc {
    pub body_bytes: Vec<u8>,
    pub auth_info_bytes: Vec<u8>,
    pub chain_id: String,
    pub account_number: u64,
}
