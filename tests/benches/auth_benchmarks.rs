//! # Authentication Benchmarks
//!
//! | Path | Measures |
//! |------|----------|
//! | sign-bytes | Derivation cost per sign mode |
//! | decode | Raw transaction decoding |
//! | authenticate | Full attempt, sequence consumption included |

use aa_base_account::AccountAuthenticationApi;
use aa_tests::fixtures::{sample_body, TestAccount};
use aa_tx_signing::{HandlerMap, SignMode, TxDecoder};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::time::Duration;

const MODES: [SignMode; 3] = [SignMode::Direct, SignMode::Textual, SignMode::LegacyAminoJson];

fn bench_sign_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign-bytes");
    let account = TestAccount::new();
    let handlers = HandlerMap::default();
    let request = account.sign_request(SignMode::Direct, 0);
    let tx_data = TxDecoder::default().decode(&request.raw_tx).unwrap();
    let signer_data = account.signer_data(0);

    for mode in MODES {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| {
                black_box(
                    handlers
                        .get_sign_bytes(mode, &signer_data, &tx_data)
                        .unwrap(),
                )
            })
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let account = TestAccount::new();
    let decoder = TxDecoder::default();
    let mut group = c.benchmark_group("decode");

    for memo_len in [16usize, 1024, 64 * 1024] {
        let body = sample_body(&"m".repeat(memo_len));
        let request = account.sign_request_with(&account.keypair, SignMode::Direct, 0, body);
        group.bench_with_input(
            BenchmarkId::new("memo_bytes", memo_len),
            &request.raw_tx,
            |b, raw_tx| b.iter(|| black_box(decoder.decode(raw_tx).unwrap())),
        );
    }
    group.finish();
}

fn bench_authenticate(c: &mut Criterion) {
    let mut group = c.benchmark_group("authenticate");
    group.measurement_time(Duration::from_secs(10));

    for mode in MODES {
        let account = TestAccount::new();
        let ctx = account.privileged_ctx();
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter_batched(
                || account.sign_request(mode, account.sequence()),
                |request| black_box(account.service.authenticate(&ctx, &request).unwrap()),
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign_bytes, bench_decode, bench_authenticate);
criterion_main!(benches);
