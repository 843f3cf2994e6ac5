//! # Wire Codec
//!
//! Canonical binary encoding for transaction parts and sign documents:
//! bincode with fixed-width integers, a size limit on decode, and trailing
//! bytes rejected so every value has exactly one accepted encoding.

use super::errors::SigningError;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default upper bound for a single decoded transaction part (1 MiB).
pub const DEFAULT_MAX_TX_BYTES: u64 = 1 << 20;

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Encode a value canonically.
pub fn encode<T: Serialize>(what: &'static str, value: &T) -> Result<Vec<u8>, SigningError> {
    wire_options()
        .serialize(value)
        .map_err(|e| SigningError::Encode {
            what,
            reason: e.to_string(),
        })
}

/// Decode a value, refusing inputs above `limit` bytes or with trailing data.
pub fn decode<T: DeserializeOwned>(
    what: &'static str,
    bytes: &[u8],
    limit: u64,
) -> Result<T, SigningError> {
    if bytes.len() as u64 > limit {
        return Err(SigningError::Decode {
            what,
            reason: format!("{} bytes exceeds limit of {}", bytes.len(), limit),
        });
    }

    wire_options()
        .with_limit(limit)
        .deserialize(bytes)
        .map_err(|e| SigningError::Decode {
            what,
            reason: e.to_string(),
        })
}
