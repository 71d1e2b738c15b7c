//! TEMPUS Server - HTTP conversion endpoint
//!
//! A thin transport over the pure converter:
//! - `GET /api/convert?s=<value>`: integers come back as date
//!   strings, date strings come back as epoch seconds, anything else
//!   is a 400
//! - `GET /`: service banner with the live clock's latest readouts
//! - anything else: JSON 404

pub mod api;

pub use api::*;
