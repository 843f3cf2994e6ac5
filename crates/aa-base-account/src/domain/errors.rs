//! # Authentication Errors
//!
//! Every variant is terminal for the current attempt. Only `Unauthorized`
//! and `MalformedRequest` are raised before the sequence is consumed.

use aa_tx_signing::SigningError;
use shared_crypto::CryptoError;
use shared_types::{CollaboratorError, StoreError};
use thiserror::Error;

/// Errors returned by the base account.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The caller may not perform this operation.
    #[error("Unauthorized caller {caller} for {operation}")]
    Unauthorized {
        caller: String,
        operation: &'static str,
    },

    /// Bad signer index, malformed mode descriptor or malformed key.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The account registry has no number for this account.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The claimed sequence is not the one just consumed.
    #[error("Sequence mismatch: expected {expected}, got {got}")]
    SequenceMismatch { expected: u64, got: u64 },

    /// Unknown, composite, disabled or unusable sign mode.
    #[error("Unsupported sign mode: {0}")]
    UnsupportedSignMode(String),

    /// The signature does not verify against the sign-bytes.
    #[error("Signature invalid: {0}")]
    SignatureInvalid(String),

    /// A collaborator or the state store could not serve the request.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// The raw transaction bytes do not decode.
    #[error("Transaction decode failed: {0}")]
    TxDecode(String),

    /// The account was never initialised with a public key.
    #[error("Public key not set for account {0}")]
    PublicKeyNotSet(String),

    /// The request's signer info is absent from, or differs from, the one
    /// inside the signed auth info.
    #[error("Signer info mismatch: {0}")]
    SignerInfoMismatch(String),
}

impl AuthError {
    /// Stable snake_case label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "unauthorized",
            Self::MalformedRequest(_) => "malformed_request",
            Self::AccountNotFound(_) => "account_not_found",
            Self::SequenceMismatch { .. } => "sequence_mismatch",
            Self::UnsupportedSignMode(_) => "unsupported_sign_mode",
            Self::SignatureInvalid(_) => "signature_invalid",
            Self::Unavailable(_) => "unavailable",
            Self::TxDecode(_) => "tx_decode",
            Self::PublicKeyNotSet(_) => "public_key_not_set",
            Self::SignerInfoMismatch(_) => "signer_info_mismatch",
        }
    }

    /// Whether the error is raised before any state is touched.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::MalformedRequest(_))
    }
}

impl From<SigningError> for AuthError {
    fn from(err: SigningError) -> Self {
        match err {
            SigningError::Decode { .. } | SigningError::Encode { .. } => {
                Self::TxDecode(err.to_string())
            }
            SigningError::EmptyModeInfo => Self::MalformedRequest(err.to_string()),
            SigningError::CompositeSignMode(_)
            | SigningError::UnknownSignMode(_)
            | SigningError::HandlerNotFound(_)
            | SigningError::Unsignable { .. } => Self::UnsupportedSignMode(err.to_string()),
        }
    }
}

impl From<CryptoError> for AuthError {
    fn from(err: CryptoError) -> Self {
        Self::SignatureInvalid(err.to_string())
    }
}

impl From<CollaboratorError> for AuthError {
    fn from(err: CollaboratorError) -> Self {
        Self::Unavailable(err.to_string())
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        Self::Unavailable(err.to_string())
    }
}
