//! # Signing Errors
//!
//! Error types for decoding, sign-mode resolution and sign-bytes production.

use super::sign_mode::SignMode;
use thiserror::Error;

/// Errors raised while turning a raw transaction into sign-bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// Raw bytes could not be decoded.
    #[error("Failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    /// A value could not be encoded.
    #[error("Failed to encode {what}: {reason}")]
    Encode { what: &'static str, reason: String },

    /// Mode descriptor has no shape at all.
    #[error("Sign mode descriptor is empty")]
    EmptyModeInfo,

    /// Multi-signer descriptors are never accepted by a single account.
    #[error("Only single-signer sign modes are accepted, got composite descriptor with {0} entries")]
    CompositeSignMode(usize),

    /// The mode number does not name any known sign mode.
    #[error("Unknown sign mode: {0}")]
    UnknownSignMode(i32),

    /// No handler is registered for a known mode.
    #[error("No handler registered for sign mode {0}")]
    HandlerNotFound(SignMode),

    /// The handler exists but refuses this transaction.
    #[error("Sign mode {mode} cannot sign this transaction: {reason}")]
    Unsignable { mode: SignMode, reason: String },
}

impl SigningError {
    /// True for errors that mean "this sign mode is not usable here".
    pub fn is_unsupported_mode(&self) -> bool {
        matches!(
            self,
            Self::CompositeSignMode(_)
                | Self::UnknownSignMode(_)
                | Self::HandlerNotFound(_)
                | Self::Unsignable { .. }
        )
    }
}
