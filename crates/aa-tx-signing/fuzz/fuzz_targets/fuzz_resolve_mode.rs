//! Fuzz target for the sign-mode resolver.
//!
//! ## Running
//!
//! ```bash
//! cd crates/aa-tx-signing
//! cargo +nightly fuzz run fuzz_resolve_mode
//! ```

#![no_main]

use aa_tx_signing::{resolve, CompactBitArray, ModeInfo, SignMode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    mode: i32,
    composite: bool,
    children: Vec<i32>,
}

fuzz_target!(|input: FuzzInput| {
    let info = if input.composite {
        ModeInfo::multi(
            CompactBitArray::default(),
            input.children.iter().copied().map(ModeInfo::single).collect(),
        )
    } else {
        ModeInfo::single(input.mode)
    };

    match resolve(&info) {
        Ok(mode) => {
            // Only single descriptors with a known number resolve.
            assert!(!input.composite);
            assert_eq!(mode.as_i32(), input.mode);
            assert_eq!(SignMode::try_from(input.mode), Ok(mode));
        }
        Err(err) => assert!(err.is_unsupported_mode()),
    }
});
