//! Direct mode: the canonical encoding of a [`SignDoc`].

use crate::domain::codec;
use crate::domain::entities::{SignDoc, SignerData, TxData};
use crate::domain::errors::SigningError;

/// Sign-bytes for direct mode.
///
/// Uses the raw body and auth-info bytes as received, so any re-encoding
/// difference on the signer's side shows up as a signature failure.
pub fn sign_bytes(data: &SignerData, tx: &TxData) -> Result<Vec<u8>, SigningError> {
    let doc = SignDoc {
        body_bytes: tx.body_bytes.clone(),
        auth_info_bytes: tx.auth_info_bytes.clone(),
        chain_id: data.chain_id.clone(),
        account_number: data.account_number,
    };
    codec::encode("sign doc", &doc)
}
