//! # Concurrent Authentication
//!
//! Parallel attempts against one account must each consume a distinct
//! sequence, with no value handed out twice and none skipped.

#[cfg(test)]
mod tests {
    use crate::fixtures::TestAccount;
    use aa_base_account::{AccountAuthenticationApi, AccountStateStore, AuthError};
    use aa_tx_signing::SignMode;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    const ATTEMPTS: u64 = 32;

    /// Sequence an attempt consumed, recovered from its outcome.
    fn consumed(claimed: u64, outcome: Result<(), AuthError>) -> u64 {
        match outcome {
            Ok(()) => claimed,
            Err(AuthError::SequenceMismatch { expected, .. }) => expected,
            Err(other) => panic!("unexpected failure: {other}"),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_attempts_consume_distinct_sequences() {
        let account = Arc::new(TestAccount::new());
        let requests: Vec<_> = (0..ATTEMPTS)
            .map(|claimed| (claimed, account.sign_request(SignMode::Direct, claimed)))
            .collect();

        let handles: Vec<_> = requests
            .into_iter()
            .map(|(claimed, request)| {
                let account = Arc::clone(&account);
                tokio::task::spawn_blocking(move || {
                    let outcome = account
                        .service
                        .authenticate(&account.privileged_ctx(), &request)
                        .map(|_| ());
                    consumed(claimed, outcome)
                })
            })
            .collect();

        let mut seen = BTreeSet::new();
        for handle in handles {
            let sequence = handle.await.unwrap();
            assert!(seen.insert(sequence), "sequence {sequence} consumed twice");
        }

        assert_eq!(seen, (0..ATTEMPTS).collect::<BTreeSet<_>>());
        assert_eq!(account.sequence(), ATTEMPTS);
    }

    #[test]
    fn test_store_hands_out_each_value_once() {
        let account = TestAccount::new();
        let threads = 8;
        let per_thread = 250;

        let mut all: Vec<u64> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..threads)
                .map(|_| {
                    scope.spawn(|| {
                        (0..per_thread)
                            .map(|_| {
                                account
                                    .store
                                    .fetch_and_increment_sequence(&account.address)
                                    .unwrap()
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            workers
                .into_iter()
                .flat_map(|worker| worker.join().unwrap())
                .collect()
        });

        all.sort_unstable();
        let expected: Vec<u64> = (0..(threads * per_thread) as u64).collect();
        assert_eq!(all, expected);
    }
}
