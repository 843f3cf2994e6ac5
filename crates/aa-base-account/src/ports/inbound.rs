//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the base account.

use crate::domain::entities::{
    AuthenticateResponse, MsgAuthenticate, MsgInit, MsgInitResponse, MsgSwapPubKey,
    MsgSwapPubKeyResponse, QuerySequenceResponse,
};
use crate::domain::errors::AuthError;
use shared_types::ExecutionContext;

/// Account authentication API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait AccountAuthenticationApi: Send + Sync {
    /// Authenticate one signer of a transaction on behalf of `ctx.whoami`.
    ///
    /// # Side effects
    /// Once the preconditions hold, the account's sequence advances by
    /// exactly one whether or not authentication succeeds.
    ///
    /// # Errors
    /// * `Unauthorized` - caller is not privileged (no state touched)
    /// * `MalformedRequest` - bad signer index or empty mode descriptor (no state touched)
    /// * `SequenceMismatch` - claimed sequence differs from the consumed one
    /// * `UnsupportedSignMode` - composite, unknown or disabled mode
    /// * `SignatureInvalid` - signature does not verify
    /// * `AccountNotFound`, `Unavailable`, `TxDecode`, `PublicKeyNotSet`
    fn authenticate(
        &self,
        ctx: &ExecutionContext,
        request: &MsgAuthenticate,
    ) -> Result<AuthenticateResponse, AuthError>;

    /// Create the account with its first public key. Privileged callers only.
    fn init(&self, ctx: &ExecutionContext, msg: &MsgInit) -> Result<MsgInitResponse, AuthError>;

    /// Rotate the public key. Only the account itself may call this.
    fn swap_pub_key(
        &self,
        ctx: &ExecutionContext,
        msg: &MsgSwapPubKey,
    ) -> Result<MsgSwapPubKeyResponse, AuthError>;

    /// Next sequence to be consumed.
    fn query_sequence(&self, ctx: &ExecutionContext) -> Result<QuerySequenceResponse, AuthError>;
}
