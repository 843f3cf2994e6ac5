//! Domain layer: messages, errors and signer data assembly.

pub mod entities;
pub mod errors;
pub mod signer_data;

pub use entities::*;
pub use errors::AuthError;
pub use signer_data::SignerDataAssembler;
