//! Ports layer: inbound API and outbound collaborator traits.

pub mod inbound;
pub mod outbound;

pub use inbound::AccountAuthenticationApi;
pub use outbound::{AccountRegistry, AccountStateStore, AddressCodec, CallerAuthority, HeaderService};
