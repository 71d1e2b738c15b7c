//! Cross-crate integration tests
//!
//! End-to-end checks over the converter, the panel, and the simulated
//! clock: cadence, display consistency, and non-destructive failure.
