//! # Transaction Signing
//!
//! Everything needed to turn a raw transaction into the exact bytes a signer
//! signed.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): wire entities, canonical codec, decoder
//!   and the sign-mode resolver
//! - **Handlers** (`handlers/`): one sign-bytes algorithm per supported mode
//!
//! ## Notes
//!
//! - Sign-bytes are derived from the bytes as received, never re-encoded
//! - Only single-signer mode descriptors resolve; composite ones are rejected
//! - Handlers exist for direct, textual and legacy JSON modes only

pub mod domain;
pub mod handlers;

// Re-export public API
pub use domain::codec::DEFAULT_MAX_TX_BYTES;
pub use domain::decoder::{build_raw_tx, encode_auth_info, encode_body, TxDecoder};
pub use domain::entities::{
    AuthInfo, Coin, CompactBitArray, Fee, ModeInfo, ModeInfoSum, MultiMode, RawTx, SignDoc,
    SignerData, SignerInfo, SingleMode, TxBody, TxData,
};
pub use domain::errors::SigningError;
pub use domain::sign_mode::{resolve, ParseSignModeError, SignMode};
pub use handlers::{HandlerMap, SignModeHandler};
