//! Textual mode: a sequence of human-readable screens joined by newlines.
//!
//! Every field a signer should review gets its own `Label: value` screen.
//! The final expert screen hashes the raw bytes so nothing outside the
//! rendered screens can change without invalidating the signature.

use crate::domain::entities::{Coin, SignerData, TxData};
use crate::domain::errors::SigningError;
use shared_crypto::Sha256Hasher;

fn render_coins(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "none".to_string();
    }
    coins
        .iter()
        .map(|c| format!("{} {}", c.amount, c.denom))
        .collect::<Vec<_>>()
        .join(", ")
}

fn raw_bytes_hash(tx: &TxData) -> String {
    let mut hasher = Sha256Hasher::new();
    // Length prefix keeps the body/auth-info boundary unambiguous.
    hasher
        .update(&(tx.body_bytes.len() as u64).to_be_bytes())
        .update(&tx.body_bytes)
        .update(&tx.auth_info_bytes);
    hex::encode(hasher.finalize())
}

/// Render the screens for a transaction.
pub fn screens(data: &SignerData, tx: &TxData) -> Vec<String> {
    let mut out = vec![
        format!("Chain id: {}", data.chain_id),
        format!("Account number: {}", data.account_number),
        format!("Sequence: {}", data.sequence),
        format!("Address: {}", data.address),
        format!("Public key: {}", data.pub_key.type_url),
        format!("This transaction has {} Message(s)", tx.body.messages.len()),
    ];

    for (i, msg) in tx.body.messages.iter().enumerate() {
        out.push(format!("Message ({}/{}): {}", i + 1, tx.body.messages.len(), msg.type_url));
    }

    if !tx.body.memo.is_empty() {
        out.push(format!("Memo: {}", tx.body.memo));
    }

    if let Some(fee) = &tx.auth_info.fee {
        out.push(format!("Fees: {}", render_coins(&fee.amount)));
        if !fee.payer.is_empty() {
            out.push(format!("Fee payer: {}", fee.payer));
        }
        if !fee.granter.is_empty() {
            out.push(format!("Fee granter: {}", fee.granter));
        }
        out.push(format!("Gas limit: {}", fee.gas_limit));
    }

    if tx.body.timeout_height != 0 {
        out.push(format!("Timeout height: {}", tx.body.timeout_height));
    }

    out.push(format!("*Hash of raw bytes: {}", raw_bytes_hash(tx)));
    out
}

/// Sign-bytes for textual mode.
pub fn sign_bytes(data: &SignerData, tx: &TxData) -> Result<Vec<u8>, SigningError> {
    Ok(screens(data, tx).join("\n").into_bytes())
}
