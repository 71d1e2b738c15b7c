//! TEMPUS Clock - Live clock and display surface
//!
//! This crate implements the periodic side of the system:
//! - [`ClockTicker`]: samples "now" once per interval and publishes
//!   epoch seconds and the formatted date to two display sinks
//! - [`DisplaySink`] and the last-write-wins [`LatestValue`] cell
//! - [`ConverterPanel`]: the field glue around the pure converter,
//!   with non-destructive failure and a modal notification

pub mod panel;
pub mod sink;
pub mod ticker;

pub use panel::*;
pub use sink::*;
pub use ticker::*;
