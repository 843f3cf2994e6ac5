//! Fuzz target for the transaction decoder.
//!
//! Arbitrary body and auth-info bytes must never panic the decoder, and
//! anything that decodes must yield sign-bytes from every handler without
//! panicking.
//!
//! ## Running
//!
//! ```bash
//! cd crates/aa-tx-signing
//! cargo +nightly fuzz run fuzz_decode_tx
//! ```

#![no_main]

use aa_tx_signing::{HandlerMap, SignMode, SignerData, TxDecoder};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    body_bytes: Vec<u8>,
    auth_info_bytes: Vec<u8>,
    chain_id: String,
    account_number: u64,
    sequence: u64,
}

fuzz_target!(|input: FuzzInput| {
    // Small limit keeps allocation-heavy inputs cheap.
    let decoder = TxDecoder::new(64 * 1024);

    let Ok(tx) = decoder.decode_parts(&input.body_bytes, &input.auth_info_bytes) else {
        return;
    };

    // Decoding keeps the raw bytes verbatim.
    assert_eq!(tx.body_bytes, input.body_bytes);
    assert_eq!(tx.auth_info_bytes, input.auth_info_bytes);

    let data = SignerData {
        address: "0x0000000000000000000000000000000000000000".to_string(),
        chain_id: input.chain_id,
        account_number: input.account_number,
        sequence: input.sequence,
        pub_key: Default::default(),
    };

    let handlers = HandlerMap::default();
    for mode in [SignMode::Direct, SignMode::Textual, SignMode::LegacyAminoJson] {
        let first = handlers.get_sign_bytes(mode, &data, &tx);
        let second = handlers.get_sign_bytes(mode, &data, &tx);
        assert_eq!(first, second);
    }
});
