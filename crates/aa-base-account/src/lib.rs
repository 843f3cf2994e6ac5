//! # Base Account
//!
//! A self-custodied account holding one secp256k1 public key and a
//! sequence counter. It authenticates transactions signed by its key and
//! uses the sequence as its only replay protection.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): messages, errors, signer data assembly
//! - **Ports Layer** (`ports/`): inbound API and outbound collaborator traits
//! - **Adapters** (`adapters/`): in-process implementations of every port
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **Replay protection**: every attempt that passes the preconditions
//!   consumes a sequence, successful or not
//! - **Privileged entry**: only the configured module may authenticate or
//!   initialise; only the account itself may rotate its key
//! - **Malleability**: high-S signatures are rejected

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::{AccountConfig, ConfigError};
pub use domain::entities::{
    AuthenticateResponse, MsgAuthenticate, MsgInit, MsgInitResponse, MsgSwapPubKey,
    MsgSwapPubKeyResponse, QuerySequenceResponse,
};
pub use domain::errors::AuthError;
pub use domain::signer_data::SignerDataAssembler;
pub use ports::inbound::AccountAuthenticationApi;
pub use ports::outbound::{
    AccountRegistry, AccountStateStore, AddressCodec, CallerAuthority, HeaderService,
};
pub use service::BaseAccountService;
