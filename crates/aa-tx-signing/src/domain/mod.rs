//! Domain layer: wire entities, sign modes and the canonical codec.

pub mod codec;
pub mod decoder;
pub mod entities;
pub mod errors;
pub mod sign_mode;

pub use codec::DEFAULT_MAX_TX_BYTES;
pub use decoder::{build_raw_tx, encode_auth_info, encode_body, TxDecoder};
pub use entities::*;
pub use errors::SigningError;
pub use sign_mode::{resolve, ParseSignModeError, SignMode};
