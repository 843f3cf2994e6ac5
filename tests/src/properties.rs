//! # Property Tests
//!
//! Randomised checks of the authentication invariants: any corruption of
//! a valid signature is rejected, any wrong claimed sequence is rejected,
//! and every attempt past the preconditions advances the sequence by one.

#[cfg(test)]
mod tests {
    use crate::fixtures::{sample_body, TestAccount};
    use aa_base_account::{AccountAuthenticationApi, AuthError};
    use aa_tx_signing::SignMode;
    use proptest::prelude::*;

    fn sign_mode() -> impl Strategy<Value = SignMode> {
        prop_oneof![
            Just(SignMode::Direct),
            Just(SignMode::Textual),
            Just(SignMode::LegacyAminoJson),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_bit_flip_in_signature_rejected(
            mode in sign_mode(),
            byte in 0usize..64,
            bit in 0u8..8,
        ) {
            let account = TestAccount::new();
            let mut request = account.sign_request(mode, 0);
            request.raw_tx.signatures[0][byte] ^= 1 << bit;

            let result = account
                .service
                .authenticate(&account.privileged_ctx(), &request);

            prop_assert!(matches!(result, Err(AuthError::SignatureInvalid(_))));
            prop_assert_eq!(account.sequence(), 1);
        }

        #[test]
        fn prop_wrong_claimed_sequence_rejected(
            start in 0u64..1_000,
            offset in 1u64..1_000,
            mode in sign_mode(),
        ) {
            let account = TestAccount::at_sequence(start);
            let request = account.sign_request(mode, start + offset);

            let err = account
                .service
                .authenticate(&account.privileged_ctx(), &request)
                .unwrap_err();

            prop_assert_eq!(err, AuthError::SequenceMismatch { expected: start, got: start + offset });
            prop_assert_eq!(account.sequence(), start + 1);
        }

        #[test]
        fn prop_memo_is_bound_by_signature(
            mode in sign_mode(),
            signed in "[a-z]{1,16}",
            submitted in "[A-Z]{1,16}",
        ) {
            let account = TestAccount::new();
            let original = account.sign_request_with(
                &account.keypair, mode, 0, sample_body(&signed),
            );
            let tampered = account.sign_request_with(
                &account.keypair, mode, 0, sample_body(&submitted),
            );
            let mut spliced = tampered;
            spliced.raw_tx.signatures = original.raw_tx.signatures;

            let result = account
                .service
                .authenticate(&account.privileged_ctx(), &spliced);

            prop_assert!(matches!(result, Err(AuthError::SignatureInvalid(_))));
        }
    }
}
