//! # Base Account Service
//!
//! Application service implementing [`AccountAuthenticationApi`].
//!
//! ## Authentication flow
//!
//! 1. Preconditions: privileged caller, signer index in range, non-empty
//!    mode descriptor. Nothing is touched if any of these fail.
//! 2. Assemble signer data (consumes the next sequence).
//! 3. Decode the transaction and take the signer info from the signed
//!    auth info; the request's copy must match it exactly.
//! 4. Compare the signed sequence with the consumed one.
//! 5. Resolve the signed sign mode and produce sign-bytes.
//! 6. Verify the signature with the account key.
//!
//! The sequence is never rolled back here; a failed attempt burns it.

use crate::config::{AccountConfig, ConfigError};
use crate::domain::entities::{
    AuthenticateResponse, MsgAuthenticate, MsgInit, MsgInitResponse, MsgSwapPubKey,
    MsgSwapPubKeyResponse, QuerySequenceResponse,
};
use crate::domain::errors::AuthError;
use crate::domain::signer_data::SignerDataAssembler;
use crate::ports::inbound::AccountAuthenticationApi;
use crate::ports::outbound::{
    AccountRegistry, AccountStateStore, AddressCodec, CallerAuthority, HeaderService,
};
use aa_telemetry::{
    auth_span, log_account_event, log_event, metric_inc, time_histogram, AUTH_ATTEMPTS,
    AUTH_DURATION, KEY_ROTATIONS,
};
use aa_tx_signing::{resolve, HandlerMap, SignerInfo, TxDecoder};
use shared_crypto::{Secp256k1PublicKey, Secp256k1Signature};
use shared_types::{ExecutionContext, StoreError};
use std::sync::Arc;
use tracing::debug;

const COMPONENT: &str = "base_account";

/// Base account service.
pub struct BaseAccountService<S, H, R, C, A>
where
    S: AccountStateStore,
    H: HeaderService,
    R: AccountRegistry,
    C: CallerAuthority,
    A: AddressCodec,
{
    config: AccountConfig,
    handlers: HandlerMap,
    decoder: TxDecoder,
    store: Arc<S>,
    header: Arc<H>,
    registry: Arc<R>,
    authority: Arc<C>,
    codec: Arc<A>,
}

impl<S, H, R, C, A> BaseAccountService<S, H, R, C, A>
where
    S: AccountStateStore,
    H: HeaderService,
    R: AccountRegistry,
    C: CallerAuthority,
    A: AddressCodec,
{
    /// Create a new service after validating `config`.
    pub fn new(
        config: AccountConfig,
        store: Arc<S>,
        header: Arc<H>,
        registry: Arc<R>,
        authority: Arc<C>,
        codec: Arc<A>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let handlers = HandlerMap::with_modes(config.sign_modes.iter().copied()).map_err(|e| {
            ConfigError::InvalidValue {
                key: "sign_modes",
                value: e.to_string(),
            }
        })?;
        let decoder = TxDecoder::new(config.max_tx_bytes);

        log_event!(
            info,
            COMPONENT,
            "Base account service created",
            privileged_module = %config.privileged_module,
            sign_modes = ?handlers.modes(),
            max_tx_bytes = config.max_tx_bytes
        );

        Ok(Self {
            config,
            handlers,
            decoder,
            store,
            header,
            registry,
            authority,
            codec,
        })
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    fn require_privileged(
        &self,
        ctx: &ExecutionContext,
        operation: &'static str,
    ) -> Result<(), AuthError> {
        if self.authority.is_privileged_caller(ctx) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                caller: ctx.sender.to_string(),
                operation,
            })
        }
    }

    /// Checks that must pass before any state is touched.
    fn check_preconditions<'r>(
        &self,
        ctx: &ExecutionContext,
        request: &'r MsgAuthenticate,
    ) -> Result<&'r SignerInfo, AuthError> {
        self.require_privileged(ctx, "authenticate")?;

        let index = request.signer_index;
        if index >= request.raw_tx.signatures.len() {
            return Err(AuthError::MalformedRequest(format!(
                "signer index {index} out of range for {} signatures",
                request.raw_tx.signatures.len()
            )));
        }
        let signer_info = request.signer_infos.get(index).ok_or_else(|| {
            AuthError::MalformedRequest(format!(
                "signer index {index} out of range for {} signer infos",
                request.signer_infos.len()
            ))
        })?;

        if signer_info.mode_info.is_empty() {
            return Err(AuthError::MalformedRequest(
                "sign mode descriptor is empty".into(),
            ));
        }

        Ok(signer_info)
    }

    /// Runs one attempt. `mode_label` is set once the signed sign mode is
    /// known.
    fn run_authentication(
        &self,
        ctx: &ExecutionContext,
        request: &MsgAuthenticate,
        mode_label: &mut &'static str,
    ) -> Result<AuthenticateResponse, AuthError> {
        let claimed_info = self.check_preconditions(ctx, request)?;
        let index = request.signer_index;

        let assembler = SignerDataAssembler::new(
            self.store.as_ref(),
            self.header.as_ref(),
            self.registry.as_ref(),
            self.codec.as_ref(),
        );
        let (pub_key, signer_data) = assembler.assemble(ctx)?;

        let tx_data = self.decoder.decode(&request.raw_tx)?;

        // Only the signer info covered by the signature is trusted.
        let signer_info = tx_data.auth_info.signer_infos.get(index).ok_or_else(|| {
            AuthError::SignerInfoMismatch(format!(
                "signer index {index} out of range for {} signed signer infos",
                tx_data.auth_info.signer_infos.len()
            ))
        })?;
        if let Ok(mode) = resolve(&signer_info.mode_info) {
            *mode_label = mode.label();
        }

        if signer_info.sequence != signer_data.sequence {
            return Err(AuthError::SequenceMismatch {
                expected: signer_data.sequence,
                got: signer_info.sequence,
            });
        }

        if signer_info != claimed_info {
            return Err(AuthError::SignerInfoMismatch(format!(
                "signer info {index} differs from the signed auth info"
            )));
        }

        let mode = resolve(&signer_info.mode_info)?;
        if !self.handlers.supports(mode) {
            return Err(AuthError::UnsupportedSignMode(format!(
                "{mode} is not enabled"
            )));
        }
        let sign_bytes = self.handlers.get_sign_bytes(mode, &signer_data, &tx_data)?;
        debug!(mode = mode.label(), len = sign_bytes.len(), "Computed sign bytes");

        let raw_signature = &request.raw_tx.signatures[index];
        let signature = Secp256k1Signature::from_slice(raw_signature)?;
        pub_key.verify(&sign_bytes, &signature)?;

        Ok(AuthenticateResponse::default())
    }

    fn parse_key(bytes: &[u8]) -> Result<Secp256k1PublicKey, AuthError> {
        Secp256k1PublicKey::from_slice(bytes)
            .map_err(|e| AuthError::MalformedRequest(format!("invalid public key: {e}")))
    }
}

impl<S, H, R, C, A> AccountAuthenticationApi for BaseAccountService<S, H, R, C, A>
where
    S: AccountStateStore,
    H: HeaderService,
    R: AccountRegistry,
    C: CallerAuthority,
    A: AddressCodec,
{
    fn authenticate(
        &self,
        ctx: &ExecutionContext,
        request: &MsgAuthenticate,
    ) -> Result<AuthenticateResponse, AuthError> {
        let _timer = time_histogram!(AUTH_DURATION);
        let span = auth_span!(
            "authenticate",
            account = %ctx.whoami,
            caller = %ctx.sender,
            signer_index = request.signer_index
        );
        let _enter = span.enter();

        let mut mode_label = "unresolved";
        let result = self.run_authentication(ctx, request, &mut mode_label);

        match &result {
            Ok(_) => {
                metric_inc!(AUTH_ATTEMPTS, &[mode_label, "success"]);
                log_account_event!(
                    info,
                    COMPONENT,
                    "Transaction authenticated",
                    ctx.whoami,
                    sign_mode = mode_label
                );
            }
            Err(err) => {
                metric_inc!(AUTH_ATTEMPTS, &[mode_label, err.kind()]);
                log_event!(
                    warn,
                    COMPONENT,
                    "Authentication rejected",
                    account = %ctx.whoami,
                    sign_mode = mode_label,
                    error_kind = err.kind(),
                    error = %err,
                    sequence_consumed = !err.is_precondition()
                );
            }
        }

        result
    }

    fn init(&self, ctx: &ExecutionContext, msg: &MsgInit) -> Result<MsgInitResponse, AuthError> {
        self.require_privileged(ctx, "init")?;
        let pub_key = Self::parse_key(&msg.pub_key)?;

        self.store
            .initialize(&ctx.whoami, pub_key)
            .map_err(|e| match e {
                StoreError::AlreadyExists(_) => {
                    AuthError::MalformedRequest(format!("account {} already initialised", ctx.whoami))
                }
                other => other.into(),
            })?;

        log_account_event!(info, COMPONENT, "Account initialised", ctx.whoami);
        Ok(MsgInitResponse::default())
    }

    fn swap_pub_key(
        &self,
        ctx: &ExecutionContext,
        msg: &MsgSwapPubKey,
    ) -> Result<MsgSwapPubKeyResponse, AuthError> {
        if !ctx.is_self_call() {
            return Err(AuthError::Unauthorized {
                caller: ctx.sender.to_string(),
                operation: "swap_pub_key",
            });
        }
        let pub_key = Self::parse_key(&msg.new_pub_key)?;

        self.store
            .set_public_key(&ctx.whoami, pub_key)
            .map_err(|e| match e {
                StoreError::NotFound(account) => AuthError::PublicKeyNotSet(account),
                other => other.into(),
            })?;

        metric_inc!(KEY_ROTATIONS);
        log_account_event!(info, COMPONENT, "Public key rotated", ctx.whoami);
        Ok(MsgSwapPubKeyResponse::default())
    }

    fn query_sequence(&self, ctx: &ExecutionContext) -> Result<QuerySequenceResponse, AuthError> {
        let sequence = self.store.current_sequence(&ctx.whoami)?;
        Ok(QuerySequenceResponse { sequence })
    }
}
