//! # Transaction Decoder
//!
//! Rebuilds [`TxData`] from a [`RawTx`], keeping the exact byte strings that
//! were signed next to the decoded structures.

use super::codec::{self, DEFAULT_MAX_TX_BYTES};
use super::entities::{AuthInfo, RawTx, TxBody, TxData};
use super::errors::SigningError;
use tracing::debug;

/// Decodes raw transaction parts under a size limit.
#[derive(Debug, Clone, Copy)]
pub struct TxDecoder {
    max_tx_bytes: u64,
}

impl TxDecoder {
    /// Create a decoder that refuses parts larger than `max_tx_bytes`.
    pub fn new(max_tx_bytes: u64) -> Self {
        Self { max_tx_bytes }
    }

    /// Decode the body and auth info of a raw transaction.
    pub fn decode(&self, raw: &RawTx) -> Result<TxData, SigningError> {
        self.decode_parts(&raw.body_bytes, &raw.auth_info_bytes)
    }

    /// Decode from the two encoded parts.
    pub fn decode_parts(
        &self,
        body_bytes: &[u8],
        auth_info_bytes: &[u8],
    ) -> Result<TxData, SigningError> {
        let body: TxBody = codec::decode("tx body", body_bytes, self.max_tx_bytes)?;
        let auth_info: AuthInfo = codec::decode("auth info", auth_info_bytes, self.max_tx_bytes)?;

        debug!(
            messages = body.messages.len(),
            signers = auth_info.signer_infos.len(),
            body_len = body_bytes.len(),
            auth_info_len = auth_info_bytes.len(),
            "Decoded transaction"
        );

        Ok(TxData {
            body,
            auth_info,
            body_bytes: body_bytes.to_vec(),
            auth_info_bytes: auth_info_bytes.to_vec(),
            body_has_unknown_non_criticals: false,
        })
    }
}

impl Default for TxDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TX_BYTES)
    }
}

/// Encode a transaction body.
pub fn encode_body(body: &TxBody) -> Result<Vec<u8>, SigningError> {
    codec::encode("tx body", body)
}

/// Encode an auth info.
pub fn encode_auth_info(auth_info: &AuthInfo) -> Result<Vec<u8>, SigningError> {
    codec::encode("auth info", auth_info)
}

/// Build an unsigned raw transaction from its decoded parts.
pub fn build_raw_tx(body: &TxBody, auth_info: &AuthInfo) -> Result<RawTx, SigningError> {
    Ok(RawTx {
        body_bytes: encode_body(body)?,
        auth_info_bytes: encode_auth_info(auth_info)?,
        signatures: Vec::new(),
    })
}
