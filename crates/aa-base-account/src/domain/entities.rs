//! # Domain Entities
//!
//! Request and response messages handled by the base account.

use aa_tx_signing::{RawTx, SignerInfo};
use serde::{Deserialize, Serialize};

/// Ask the account to authenticate one signer of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAuthenticate {
    /// The transaction exactly as received.
    pub raw_tx: RawTx,
    /// Per-signer metadata, parallel to `raw_tx.signatures`.
    pub signer_infos: Vec<SignerInfo>,
    /// Which entry of the parallel arrays belongs to this account.
    pub signer_index: usize,
}

/// Successful authentication. Carries no data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateResponse {}

/// Create the account with its first public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInit {
    /// Compressed secp256k1 public key (33 bytes).
    pub pub_key: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInitResponse {}

/// Replace the account's public key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSwapPubKey {
    /// Compressed secp256k1 public key (33 bytes).
    pub new_pub_key: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSwapPubKeyResponse {}

/// Next sequence the account will consume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySequenceResponse {
    pub sequence: u64,
}
