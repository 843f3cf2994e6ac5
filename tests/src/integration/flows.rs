//! # Integration Test Flows
//!
//! End-to-end account lifecycles through the public API: initialise,
//! authenticate in every enabled mode, rotate the key, and observe the
//! sequence and metrics along the way.

#[cfg(test)]
mod tests {
    use crate::fixtures::{sample_body, signer_info, TestAccount};
    use aa_base_account::{
        AccountAuthenticationApi, AccountConfig, AuthError, MsgAuthenticate, MsgInit,
        MsgSwapPubKey,
    };
    use aa_tx_signing::{CompactBitArray, ModeInfo, SignMode};
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{CallerId, ExecutionContext};

    // =========================================================================
    // SEQUENCE SCENARIOS
    // =========================================================================

    #[test]
    fn test_direct_mode_at_sequence_five() {
        let account = TestAccount::at_sequence(5);
        let request = account.sign_request(SignMode::Direct, 5);

        let result = account
            .service
            .authenticate(&account.privileged_ctx(), &request);

        assert!(result.is_ok());
        assert_eq!(account.sequence(), 6);
    }

    #[test]
    fn test_claimed_seven_at_sequence_five() {
        let account = TestAccount::at_sequence(5);
        let request = account.sign_request(SignMode::Direct, 7);

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert_eq!(err, AuthError::SequenceMismatch { expected: 5, got: 7 });
        assert_eq!(account.sequence(), 6);
    }

    #[test]
    fn test_mixed_modes_consume_consecutive_sequences() {
        let account = TestAccount::new();
        let ctx = account.privileged_ctx();
        let modes = [
            SignMode::Direct,
            SignMode::Textual,
            SignMode::LegacyAminoJson,
            SignMode::Direct,
        ];

        for (sequence, mode) in modes.into_iter().enumerate() {
            let request = account.sign_request(mode, sequence as u64);
            account.service.authenticate(&ctx, &request).unwrap();
            assert_eq!(account.sequence(), sequence as u64 + 1);
        }
    }

    #[test]
    fn test_failed_attempt_burns_sequence_for_good() {
        let account = TestAccount::new();
        let ctx = account.privileged_ctx();

        // Signed for 0, but with the wrong key: rejected, 0 is gone.
        let stranger = Secp256k1KeyPair::generate();
        let forged =
            account.sign_request_with(&stranger, SignMode::Direct, 0, sample_body("forged"));
        assert!(matches!(
            account.service.authenticate(&ctx, &forged),
            Err(AuthError::SignatureInvalid(_))
        ));

        // The genuine signature for 0 can no longer be used.
        let genuine = account.sign_request(SignMode::Direct, 0);
        assert!(matches!(
            account.service.authenticate(&ctx, &genuine),
            Err(AuthError::SequenceMismatch { expected: 1, got: 0 })
        ));

        // Re-signing for the current sequence works.
        let current = account.sign_request(SignMode::Direct, 2);
        assert!(account.service.authenticate(&ctx, &current).is_ok());
        assert_eq!(account.sequence(), 3);
    }

    // =========================================================================
    // PRECONDITIONS
    // =========================================================================

    #[test]
    fn test_preconditions_never_touch_sequence() {
        let account = TestAccount::at_sequence(3);
        let good = account.sign_request(SignMode::Direct, 3);

        let outsider = ExecutionContext::new(account.address, CallerId::module("bank"));
        assert!(matches!(
            account.service.authenticate(&outsider, &good),
            Err(AuthError::Unauthorized { .. })
        ));

        let mut bad_index = good.clone();
        bad_index.signer_index = 5;
        assert!(matches!(
            account.service.authenticate(&account.privileged_ctx(), &bad_index),
            Err(AuthError::MalformedRequest(_))
        ));

        let mut empty_mode = good.clone();
        empty_mode.signer_infos[0].mode_info = ModeInfo::default();
        assert!(matches!(
            account.service.authenticate(&account.privileged_ctx(), &empty_mode),
            Err(AuthError::MalformedRequest(_))
        ));

        assert_eq!(account.sequence(), 3);
        assert!(account
            .service
            .authenticate(&account.privileged_ctx(), &good)
            .is_ok());
    }

    #[test]
    fn test_composite_descriptor_rejected_after_consumption() {
        let account = TestAccount::new();
        let composite = signer_info(
            ModeInfo::multi(
                CompactBitArray {
                    extra_bits_stored: 2,
                    elems: vec![0b1100_0000],
                },
                vec![
                    ModeInfo::single(SignMode::Direct.as_i32()),
                    ModeInfo::single(SignMode::Direct.as_i32()),
                ],
            ),
            0,
        );
        let request = MsgAuthenticate {
            raw_tx: account.signed_tx(
                &account.keypair,
                vec![composite.clone()],
                SignMode::Direct,
                0,
                sample_body("composite"),
            ),
            signer_infos: vec![composite],
            signer_index: 0,
        };

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert!(matches!(err, AuthError::UnsupportedSignMode(_)));
        assert_eq!(account.sequence(), 1);
    }

    #[test]
    fn test_restricted_mode_set() {
        let account = TestAccount::with_config(AccountConfig {
            sign_modes: vec![SignMode::Direct],
            ..AccountConfig::default()
        });
        let ctx = account.privileged_ctx();

        let amino = account.sign_request(SignMode::LegacyAminoJson, 0);
        assert!(matches!(
            account.service.authenticate(&ctx, &amino),
            Err(AuthError::UnsupportedSignMode(_))
        ));

        let direct = account.sign_request(SignMode::Direct, 1);
        assert!(account.service.authenticate(&ctx, &direct).is_ok());
    }

    // =========================================================================
    // REQUEST VS SIGNED AUTH INFO
    // =========================================================================

    #[test]
    fn test_direct_replay_with_bumped_outer_sequence() {
        let account = TestAccount::at_sequence(5);
        let ctx = account.privileged_ctx();
        let mut request = account.sign_request(SignMode::Direct, 5);
        account.service.authenticate(&ctx, &request).unwrap();

        // Same bytes and signature; only the unsigned copy is edited.
        request.signer_infos[0].sequence = 6;
        let err = account.service.authenticate(&ctx, &request).unwrap_err();

        assert_eq!(err, AuthError::SequenceMismatch { expected: 6, got: 5 });
        assert_eq!(account.sequence(), 7);
    }

    #[test]
    fn test_every_mode_rejects_outer_sequence_edit() {
        for mode in [SignMode::Direct, SignMode::Textual, SignMode::LegacyAminoJson] {
            let account = TestAccount::at_sequence(2);
            let mut request = account.sign_request(mode, 1);
            request.signer_infos[0].sequence = 2;

            let err = account
                .service
                .authenticate(&account.privileged_ctx(), &request)
                .unwrap_err();

            assert_eq!(err, AuthError::SequenceMismatch { expected: 2, got: 1 }, "{mode}");
            assert_eq!(account.sequence(), 3);
        }
    }

    #[test]
    fn test_outer_mode_diverging_from_signed_mode() {
        let account = TestAccount::new();
        let mut request = account.sign_request(SignMode::Direct, 0);
        request.signer_infos[0].mode_info = ModeInfo::single(SignMode::LegacyAminoJson.as_i32());

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert!(matches!(err, AuthError::SignerInfoMismatch(_)));
        assert_eq!(account.sequence(), 1);
    }

    #[test]
    fn test_signed_auth_info_shorter_than_signer_index() {
        let account = TestAccount::new();
        let first = signer_info(ModeInfo::single(SignMode::Direct.as_i32()), 0);
        let mut raw_tx = account.signed_tx(
            &account.keypair,
            vec![first.clone()],
            SignMode::Direct,
            0,
            sample_body("two signers"),
        );
        raw_tx.signatures.push(raw_tx.signatures[0].clone());
        let request = MsgAuthenticate {
            raw_tx,
            signer_infos: vec![first.clone(), first],
            signer_index: 1,
        };

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert!(matches!(err, AuthError::SignerInfoMismatch(_)));
        assert_eq!(account.sequence(), 1);
    }

    #[test]
    fn test_authenticate_before_init_leaves_no_state() {
        let account = TestAccount::new();
        let stranger = ExecutionContext::new(
            shared_types::AccountAddress::new([0x5A; 20]),
            CallerId::module("accounts"),
        );
        let request = account.sign_request(SignMode::Direct, 0);

        for _ in 0..3 {
            assert!(matches!(
                account.service.authenticate(&stranger, &request),
                Err(AuthError::PublicKeyNotSet(_))
            ));
        }
        account
            .service
            .init(
                &stranger,
                &MsgInit {
                    pub_key: Secp256k1KeyPair::generate().public_key().as_bytes().to_vec(),
                },
            )
            .unwrap();

        assert_eq!(account.service.query_sequence(&stranger).unwrap().sequence, 0);
    }

    // =========================================================================
    // COLLABORATOR FAILURES
    // =========================================================================

    #[test]
    fn test_header_outage_consumes_sequence() {
        let account = TestAccount::at_sequence(2);
        account.header.set_chain_id(None);
        let request = account.sign_request(SignMode::Direct, 2);

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert!(matches!(err, AuthError::Unavailable(_)));
        assert_eq!(account.sequence(), 3);
    }

    #[test]
    fn test_registry_outage_consumes_sequence() {
        let account = TestAccount::at_sequence(2);
        account.registry.set_offline(true);
        let request = account.sign_request(SignMode::Textual, 2);

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert!(matches!(err, AuthError::Unavailable(_)));
        assert_eq!(account.sequence(), 3);
    }

    #[test]
    fn test_chain_id_is_bound() {
        let account = TestAccount::new();
        let request = account.sign_request(SignMode::Direct, 0);
        account.header.set_chain_id(Some("other-chain".to_string()));

        let err = account
            .service
            .authenticate(&account.privileged_ctx(), &request)
            .unwrap_err();

        assert!(matches!(err, AuthError::SignatureInvalid(_)));
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    #[test]
    fn test_key_rotation_lifecycle() {
        let mut account = TestAccount::new();
        let ctx = account.privileged_ctx();

        account
            .service
            .authenticate(&ctx, &account.sign_request(SignMode::Direct, 0))
            .unwrap();

        let replacement = Secp256k1KeyPair::generate();
        account
            .service
            .swap_pub_key(
                &account.self_ctx(),
                &MsgSwapPubKey {
                    new_pub_key: replacement.public_key().as_bytes().to_vec(),
                },
            )
            .unwrap();
        assert_eq!(account.sequence(), 1);

        // Old key no longer authenticates.
        let stale = account.sign_request(SignMode::Direct, 1);
        assert!(matches!(
            account.service.authenticate(&ctx, &stale),
            Err(AuthError::SignatureInvalid(_))
        ));

        // New key does, at the next sequence.
        account.keypair = replacement;
        let fresh = account.sign_request(SignMode::Textual, 2);
        assert!(account.service.authenticate(&ctx, &fresh).is_ok());
        assert_eq!(account.sequence(), 3);
    }

    #[test]
    fn test_reinit_rejected() {
        let account = TestAccount::new();

        let err = account
            .service
            .init(
                &account.privileged_ctx(),
                &MsgInit {
                    pub_key: Secp256k1KeyPair::generate().public_key().as_bytes().to_vec(),
                },
            )
            .unwrap_err();

        assert!(matches!(err, AuthError::MalformedRequest(_)));
    }

    #[test]
    fn test_query_sequence_tracks_attempts() {
        let account = TestAccount::new();
        let ctx = account.privileged_ctx();

        for claimed in [0, 9, 2] {
            let _ = account
                .service
                .authenticate(&ctx, &account.sign_request(SignMode::Direct, claimed));
        }

        let response = account.service.query_sequence(&ctx).unwrap();
        assert_eq!(response.sequence, 3);
    }

    // =========================================================================
    // TELEMETRY
    // =========================================================================

    #[test]
    fn test_attempt_labelled_with_signed_mode() {
        let attempts = |mode: &str| {
            aa_telemetry::AUTH_ATTEMPTS
                .with_label_values(&[mode, "signer_info_mismatch"])
                .get()
        };
        let (direct_before, textual_before) = (attempts("direct"), attempts("textual"));

        let account = TestAccount::new();
        let mut request = account.sign_request(SignMode::Direct, 0);
        request.signer_infos[0].mode_info = ModeInfo::single(SignMode::Textual.as_i32());
        let _ = account
            .service
            .authenticate(&account.privileged_ctx(), &request);

        assert!(attempts("direct") > direct_before);
        assert_eq!(attempts("textual"), textual_before);
    }

    #[test]
    fn test_metrics_exported_after_attempts() {
        aa_telemetry::register_metrics().unwrap();
        let account = TestAccount::new();
        let ctx = account.privileged_ctx();
        account
            .service
            .authenticate(&ctx, &account.sign_request(SignMode::Direct, 0))
            .unwrap();
        let _ = account
            .service
            .authenticate(&ctx, &account.sign_request(SignMode::Direct, 0));

        let text = aa_telemetry::gather_text().unwrap();

        assert!(text.contains("aa_auth_attempts_total"));
        assert!(text.contains("sequence_mismatch"));
        assert!(text.contains("aa_auth_sequences_consumed_total"));
        assert!(text.contains("aa_auth_duration_seconds"));
    }
}
