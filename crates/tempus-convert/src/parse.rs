//! Date-string to epoch-seconds parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use tempus_core::{EpochSeconds, ParseError, ParseResult};

/// Zone-less date-time layouts, tried in order.
/// `%.f` also matches the empty fraction, so each entry covers both
/// the whole-second and fractional spellings.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts; the time of day reads as midnight.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a date string into whole epoch seconds.
///
/// Accepts the canonical `YYYY-MM-DD HH:MM:SS` form plus the common
/// neighbouring spellings: fractional seconds, `T` separators, `/`
/// date separators, minute precision, bare dates, RFC 3339 and
/// RFC 2822. Zone-less input reads as UTC; an explicit offset is
/// honoured before the instant lands in UTC. Sub-second instants
/// round to the nearest whole second, half toward positive infinity.
pub fn to_epoch_seconds(text: &str) -> ParseResult<EpochSeconds> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Offset-carrying forms first: they are self-delimiting
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(round_to_seconds(dt.with_timezone(&Utc)));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(round_to_seconds(dt.with_timezone(&Utc)));
    }

    for layout in DATE_TIME_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(round_to_seconds(naive.and_utc()));
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return Ok(round_to_seconds(date.and_time(NaiveTime::MIN).and_utc()));
        }
    }

    Err(ParseError::Unrecognized(trimmed.to_owned()))
}

/// Round an instant to whole seconds, half toward positive infinity.
/// `timestamp()` floors, with the sub-second part always non-negative,
/// so a carry when the fraction reaches .5 gives round-half-up for
/// instants on both sides of the epoch.
fn round_to_seconds(dt: DateTime<Utc>) -> EpochSeconds {
    let carry = i64::from(dt.timestamp_subsec_nanos() >= 500_000_000);
    EpochSeconds::new(dt.timestamp() + carry)
}
