//! Time primitives for TEMPUS
//!
//! The canonical representation of a point in time is `EpochSeconds`:
//! a signed count of whole seconds since 1970-01-01T00:00:00Z.
//! `DateTimeString` carries the rendered `YYYY-MM-DD HH:MM:SS` form.

use std::fmt;

/// A point in time as whole seconds since the Unix epoch.
/// Negative values denote instants before 1970.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochSeconds(pub i64);

impl EpochSeconds {
    pub const ZERO: EpochSeconds = EpochSeconds(0);

    #[inline]
    pub fn new(secs: i64) -> Self {
        EpochSeconds(secs)
    }

    /// Floor a millisecond instant down to whole seconds.
    /// INVARIANT: flooring, not truncation - negative instants round
    /// toward negative infinity so second boundaries stay aligned.
    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        EpochSeconds(millis.div_euclid(1000))
    }

    #[inline]
    pub fn as_secs(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0.saturating_mul(1000)
    }

    #[inline]
    pub fn saturating_add_secs(self, secs: i64) -> Self {
        EpochSeconds(self.0.saturating_add(secs))
    }
}

impl fmt::Display for EpochSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rendered date-time in the fixed `YYYY-MM-DD HH:MM:SS` form.
///
/// Construction happens in the converter; this wrapper only carries
/// the finished text so sinks and transports cannot confuse it with
/// arbitrary strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateTimeString(String);

impl DateTimeString {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        DateTimeString(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DateTimeString {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateTimeString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
