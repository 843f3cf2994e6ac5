//! # Signer Data Assembly
//!
//! Gathers everything a sign mode needs about the signing account. The
//! sequence is consumed before any other lookup, so every failure after
//! that point still leaves it advanced. An account that was never
//! initialised has no sequence to consume and fails first.

use crate::domain::errors::AuthError;
use crate::ports::outbound::{AccountRegistry, AccountStateStore, AddressCodec, HeaderService};
use aa_telemetry::{metric_inc, SEQUENCES_CONSUMED};
use aa_tx_signing::SignerData;
use shared_crypto::Secp256k1PublicKey;
use shared_types::{Any, ExecutionContext, StoreError};
use tracing::debug;

/// Builds [`SignerData`] for one authentication attempt.
pub struct SignerDataAssembler<'a, S, H, R, A> {
    store: &'a S,
    header: &'a H,
    registry: &'a R,
    codec: &'a A,
}

impl<'a, S, H, R, A> SignerDataAssembler<'a, S, H, R, A>
where
    S: AccountStateStore,
    H: HeaderService,
    R: AccountRegistry,
    A: AddressCodec,
{
    pub fn new(store: &'a S, header: &'a H, registry: &'a R, codec: &'a A) -> Self {
        Self {
            store,
            header,
            registry,
            codec,
        }
    }

    /// Assemble signer data for `ctx.whoami`, consuming its next sequence.
    ///
    /// Returns the account key alongside the data so the caller can verify
    /// without a second store read.
    pub fn assemble(
        &self,
        ctx: &ExecutionContext,
    ) -> Result<(Secp256k1PublicKey, SignerData), AuthError> {
        let account = &ctx.whoami;
        let address = self.codec.bytes_to_string(account)?;

        let sequence = self
            .store
            .fetch_and_increment_sequence(account)
            .map_err(|e| match e {
                StoreError::NotFound(_) => AuthError::PublicKeyNotSet(address.clone()),
                other => other.into(),
            })?;
        metric_inc!(SEQUENCES_CONSUMED);
        debug!(account = %address, sequence, "Consumed sequence");

        let chain_id = self.header.get_chain_id()?;

        let pub_key = self
            .store
            .public_key(account)?
            .ok_or_else(|| AuthError::PublicKeyNotSet(address.clone()))?;

        let account_number = self
            .registry
            .get_account_number(account)?
            .ok_or_else(|| AuthError::AccountNotFound(address.clone()))?;

        let data = SignerData {
            address,
            chain_id,
            account_number,
            sequence,
            pub_key: Any::new(pub_key.type_url(), pub_key.as_bytes().to_vec()),
        };

        Ok((pub_key, data))
    }
}
