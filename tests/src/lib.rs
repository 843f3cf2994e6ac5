//! # Abstracted Accounts Test Suite
//!
//! Cross-crate tests for the base account:
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wired in-memory account and request signing
//! ├── integration/      # Lifecycle flows and concurrent attempts
//! └── properties.rs     # Randomised invariant checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p aa-tests
//! cargo test -p aa-tests integration::
//!
//! # Benchmarks
//! cargo bench -p aa-tests
//! ```

pub mod properties;
