//! # Sign Mode Handlers
//!
//! One handler per supported sign mode, collected in a [`HandlerMap`] keyed
//! by mode. The set of handlers is closed; the map only decides which of
//! them are enabled.

pub mod amino_json;
pub mod direct;
pub mod textual;

use crate::domain::entities::{SignerData, TxData};
use crate::domain::errors::SigningError;
use crate::domain::sign_mode::SignMode;
use std::collections::BTreeMap;
use tracing::trace;

/// A sign-bytes algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignModeHandler {
    Direct,
    Textual,
    LegacyAminoJson,
}

impl SignModeHandler {
    /// The handler for `mode`, if one exists.
    pub fn for_mode(mode: SignMode) -> Option<Self> {
        match mode {
            SignMode::Direct => Some(Self::Direct),
            SignMode::Textual => Some(Self::Textual),
            SignMode::LegacyAminoJson => Some(Self::LegacyAminoJson),
            SignMode::Unspecified | SignMode::DirectAux | SignMode::Eip191 => None,
        }
    }

    pub fn mode(&self) -> SignMode {
        match self {
            Self::Direct => SignMode::Direct,
            Self::Textual => SignMode::Textual,
            Self::LegacyAminoJson => SignMode::LegacyAminoJson,
        }
    }

    /// Produce the bytes the signer must have signed.
    pub fn get_sign_bytes(&self, data: &SignerData, tx: &TxData) -> Result<Vec<u8>, SigningError> {
        match self {
            Self::Direct => direct::sign_bytes(data, tx),
            Self::Textual => textual::sign_bytes(data, tx),
            Self::LegacyAminoJson => amino_json::sign_bytes(data, tx),
        }
    }
}

/// Enabled handlers keyed by sign mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerMap {
    handlers: BTreeMap<SignMode, SignModeHandler>,
}

impl HandlerMap {
    /// An empty map; every mode is unsupported.
    pub fn new() -> Self {
        Self {
            handlers: BTreeMap::new(),
        }
    }

    /// A map enabling exactly the given modes.
    ///
    /// Fails on the first mode that has no handler.
    pub fn with_modes(modes: impl IntoIterator<Item = SignMode>) -> Result<Self, SigningError> {
        let mut map = Self::new();
        for mode in modes {
            map.register(mode)?;
        }
        Ok(map)
    }

    /// Enable the handler for `mode`.
    pub fn register(&mut self, mode: SignMode) -> Result<(), SigningError> {
        let handler = SignModeHandler::for_mode(mode).ok_or(SigningError::HandlerNotFound(mode))?;
        self.handlers.insert(mode, handler);
        Ok(())
    }

    pub fn supports(&self, mode: SignMode) -> bool {
        self.handlers.contains_key(&mode)
    }

    /// Enabled modes in ascending order.
    pub fn modes(&self) -> Vec<SignMode> {
        self.handlers.keys().copied().collect()
    }

    /// Dispatch to the handler for `mode`.
    pub fn get_sign_bytes(
        &self,
        mode: SignMode,
        data: &SignerData,
        tx: &TxData,
    ) -> Result<Vec<u8>, SigningError> {
        let handler = self
            .handlers
            .get(&mode)
            .ok_or(SigningError::HandlerNotFound(mode))?;
        let bytes = handler.get_sign_bytes(data, tx)?;
        trace!(mode = mode.label(), len = bytes.len(), "Produced sign bytes");
        Ok(bytes)
    }
}

impl Default for HandlerMap {
    fn default() -> Self {
        Self {
            handlers: [
                SignModeHandler::Direct,
                SignModeHandler::Textual,
                SignModeHandler::LegacyAminoJson,
            ]
            .into_iter()
            .map(|h| (h.mode(), h))
            .collect(),
        }
    }
}
