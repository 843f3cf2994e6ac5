//! In-process adapters for every outbound port.

pub mod address_codec;
pub mod collaborators;
pub mod memory_store;

pub use address_codec::HexAddressCodec;
pub use collaborators::{InMemoryAccountRegistry, ModuleCallerAuthority, StaticHeaderService};
pub use memory_store::InMemoryAccountStore;
