//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised by account state storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No state exists for the account.
    #[error("Account state not found: {0}")]
    NotFound(String),

    /// State for the account was already created.
    #[error("Account state already exists: {0}")]
    AlreadyExists(String),

    /// A lock guarding the state was poisoned by a panicking writer.
    #[error("Lock poisoned")]
    LockPoisoned,

    /// The sequence counter cannot advance any further.
    #[error("Sequence overflow for account {0}")]
    SequenceOverflow(String),

    /// Backend failure.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Errors raised by external collaborators (header source, registries, codecs).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or did not answer.
    #[error("{service} unavailable: {reason}")]
    Unavailable {
        /// Name of the collaborator.
        service: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// The collaborator answered but rejected the input.
    #[error("{service} rejected input: {reason}")]
    Rejected {
        /// Name of the collaborator.
        service: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}
