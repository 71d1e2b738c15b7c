//! TEMPUS Loadtest - Workload driver for the conversion endpoint
//!
//! Emulates the production traffic mix against a running server:
//! - staged virtual-user ramp (up, steady, down)
//! - four weighted user journeys: browse the index, convert a valid
//!   timestamp, trip the conversion error path, hit an unknown path
//! - journey-specific think times drawn from a seeded RNG
//! - latency percentiles and pass-rate thresholds over the whole run

pub mod harness;
pub mod journey;
pub mod metrics;

pub use harness::*;
pub use journey::*;
pub use metrics::*;
