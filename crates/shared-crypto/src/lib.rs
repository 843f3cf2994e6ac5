//! # Shared Crypto - Account Key Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecdsa` | secp256k1 | Account keys and transaction signatures |
//! | `hashing` | SHA-256 | Message digests, sign-bytes fingerprints |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic, low-S enforced on verify
//! - Secret keys zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{
    Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature, SECP256K1_PUBKEY_TYPE_URL,
};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_many, Sha256Hasher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
