//! Legacy JSON mode.
//!
//! Produces a compact JSON `StdSignDoc` with keys in sorted order. Struct
//! fields below are declared alphabetically; serde_json emits them in
//! declaration order.

use crate::domain::entities::{Coin, SignerData, TxData};
use crate::domain::errors::SigningError;
use crate::domain::sign_mode::SignMode;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StdCoin<'a> {
    amount: &'a str,
    denom: &'a str,
}

#[derive(Debug, Serialize)]
struct StdFee<'a> {
    amount: Vec<StdCoin<'a>>,
    gas: String,
    #[serde(skip_serializing_if = "is_blank")]
    granter: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    payer: &'a str,
}

#[derive(Debug, Serialize)]
struct StdMsg<'a> {
    #[serde(rename = "type")]
    type_url: &'a str,
    value: String,
}

#[derive(Debug, Serialize)]
struct StdSignDoc<'a> {
    account_number: String,
    chain_id: &'a str,
    fee: StdFee<'a>,
    memo: &'a str,
    msgs: Vec<StdMsg<'a>>,
    sequence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_height: Option<String>,
}

fn is_blank(s: &&str) -> bool {
    s.is_empty()
}

fn unsignable(reason: &str) -> SigningError {
    SigningError::Unsignable {
        mode: SignMode::LegacyAminoJson,
        reason: reason.to_string(),
    }
}

fn std_coins(coins: &[Coin]) -> Vec<StdCoin<'_>> {
    coins
        .iter()
        .map(|c| StdCoin {
            amount: &c.amount,
            denom: &c.denom,
        })
        .collect()
}

/// Sign-bytes for legacy JSON mode.
pub fn sign_bytes(data: &SignerData, tx: &TxData) -> Result<Vec<u8>, SigningError> {
    if tx.body_has_unknown_non_criticals {
        return Err(unsignable("body has unknown non-critical fields"));
    }
    if !tx.body.extension_options.is_empty() {
        return Err(unsignable("body has extension options"));
    }
    if !tx.body.non_critical_extension_options.is_empty() {
        return Err(unsignable("body has non-critical extension options"));
    }

    let fee = match &tx.auth_info.fee {
        Some(fee) => StdFee {
            amount: std_coins(&fee.amount),
            gas: fee.gas_limit.to_string(),
            granter: &fee.granter,
            payer: &fee.payer,
        },
        None => StdFee {
            amount: Vec::new(),
            gas: "0".to_string(),
            granter: "",
            payer: "",
        },
    };

    let doc = StdSignDoc {
        account_number: data.account_number.to_string(),
        chain_id: &data.chain_id,
        fee,
        memo: &tx.body.memo,
        msgs: tx
            .body
            .messages
            .iter()
            .map(|m| StdMsg {
                type_url: &m.type_url,
                value: hex::encode(&m.value),
            })
            .collect(),
        sequence: data.sequence.to_string(),
        timeout_height: (tx.body.timeout_height != 0).then(|| tx.body.timeout_height.to_string()),
    };

    serde_json::to_vec(&doc).map_err(|e| SigningError::Encode {
        what: "std sign doc",
        reason: e.to_string(),
    })
}
