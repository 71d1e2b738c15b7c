//! TEMPUS Test - Deterministic clock harness
//!
//! Test tooling for time-dependent behavior:
//! - [`ManualTimeSource`]: a hand-advanced clock
//! - [`RecordingSink`]: a display sink that remembers every write
//! - [`ClockSimulator`]: drives the real ticker publish path tick by
//!   tick, with an optional seeded scheduling-jitter model
//!
//! Cross-crate integration tests live in [`integration`]; converter
//! benchmarks live under `benches/`.

pub mod integration;
pub mod simulator;

pub use simulator::*;
