//! # Shared Types Crate
//!
//! Identity and encoding types shared by the signing and account
//! crates, plus the storage and collaborator error types that cross crate
//! boundaries.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types are defined here only.
//! - **Context Authority**: the `ExecutionContext::sender` field is the sole
//!   source of caller identity; payloads never carry their own.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
