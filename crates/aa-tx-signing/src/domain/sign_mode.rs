//! # Sign Modes
//!
//! The closed set of sign-bytes algorithms and the resolver that maps a
//! signer's mode descriptor onto one of them.

use super::entities::{ModeInfo, ModeInfoSum};
use super::errors::SigningError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies the algorithm used to derive sign-bytes from a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum SignMode {
    /// Unknown mode; always rejected.
    Unspecified = 0,
    /// Canonical encoding of body bytes, auth-info bytes, chain id and account number.
    Direct = 1,
    /// Human-readable screens.
    Textual = 2,
    /// Direct mode for auxiliary signers (no handler).
    DirectAux = 3,
    /// Sorted-key JSON document.
    LegacyAminoJson = 127,
    /// Ethereum personal-sign (no handler).
    Eip191 = 191,
}

impl SignMode {
    /// Every mode, in numeric order.
    pub const ALL: [SignMode; 6] = [
        SignMode::Unspecified,
        SignMode::Direct,
        SignMode::Textual,
        SignMode::DirectAux,
        SignMode::LegacyAminoJson,
        SignMode::Eip191,
    ];

    /// Stable upper-case name.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            SignMode::Unspecified => "SIGN_MODE_UNSPECIFIED",
            SignMode::Direct => "SIGN_MODE_DIRECT",
            SignMode::Textual => "SIGN_MODE_TEXTUAL",
            SignMode::DirectAux => "SIGN_MODE_DIRECT_AUX",
            SignMode::LegacyAminoJson => "SIGN_MODE_LEGACY_AMINO_JSON",
            SignMode::Eip191 => "SIGN_MODE_EIP_191",
        }
    }

    /// Short lower-case label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            SignMode::Unspecified => "unspecified",
            SignMode::Direct => "direct",
            SignMode::Textual => "textual",
            SignMode::DirectAux => "direct_aux",
            SignMode::LegacyAminoJson => "legacy_amino_json",
            SignMode::Eip191 => "eip_191",
        }
    }

    /// Wire number of the mode.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for SignMode {
    type Error = SigningError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        SignMode::ALL
            .into_iter()
            .find(|mode| mode.as_i32() == value)
            .ok_or(SigningError::UnknownSignMode(value))
    }
}

impl fmt::Display for SignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str_name())
    }
}

/// Parse error for [`SignMode::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized sign mode name: {0}")]
pub struct ParseSignModeError(pub String);

impl FromStr for SignMode {
    type Err = ParseSignModeError;

    /// Accepts either the short label (`direct`) or the full name
    /// (`SIGN_MODE_DIRECT`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SignMode::ALL
            .into_iter()
            .find(|mode| {
                mode.label().eq_ignore_ascii_case(needle)
                    || mode.as_str_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseSignModeError(s.to_string()))
    }
}

/// Resolve a signer's mode descriptor to a sign mode.
///
/// Only single-signer descriptors are accepted; composite descriptors are
/// rejected regardless of what they contain.
pub fn resolve(info: &ModeInfo) -> Result<SignMode, SigningError> {
    match &info.sum {
        None => Err(SigningError::EmptyModeInfo),
        Some(ModeInfoSum::Multi(multi)) => {
            Err(SigningError::CompositeSignMode(multi.mode_infos.len()))
        }
        Some(ModeInfoSum::Single(single)) => SignMode::try_from(single.mode),
    }
}
