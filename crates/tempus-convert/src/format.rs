//! Epoch-seconds to date-string formatting

use chrono::{DateTime, Datelike, Timelike, Utc};

use tempus_core::{DateTimeString, EpochSeconds};

/// Render an instant as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Total over all of i64: there is no error path. Month, day, hour,
/// minute and second are each exactly two zero-padded digits; the year
/// renders as-is, including a leading `-` for years before year 0 and
/// more than four digits where the calendar reaches that far.
pub fn to_date_string(ts: EpochSeconds) -> DateTimeString {
    let dt = civil(ts);
    DateTimeString::new(format!(
        "{}-{:02}-{:02} {:02}:{:02}:{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    ))
}

/// Decompose an instant into UTC civil fields.
/// Instants beyond the supported calendar clamp to the calendar
/// bounds, keeping the operation total.
fn civil(ts: EpochSeconds) -> DateTime<Utc> {
    DateTime::from_timestamp(ts.as_secs(), 0).unwrap_or(if ts.as_secs() < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_epoch_start() {
        assert_eq!(
            to_date_string(EpochSeconds::ZERO).as_str(),
            "1970-01-01 00:00:00"
        );
    }

    #[test]
    fn test_pinned_instant() {
        assert_eq!(
            to_date_string(EpochSeconds::new(1451613802)).as_str(),
            "2016-01-01 02:03:22"
        );
    }

    #[test]
    fn test_midnight_is_hour_zero() {
        // 2023-01-01T00:00:00Z; the legacy service rendered this hour as 12
        assert_eq!(
            to_date_string(EpochSeconds::new(1672531200)).as_str(),
            "2023-01-01 00:00:00"
        );
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            to_date_string(EpochSeconds::new(1582934400)).as_str(),
            "2020-02-29 00:00:00"
        );
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(
            to_date_string(EpochSeconds::new(-1)).as_str(),
            "1969-12-31 23:59:59"
        );
        assert_eq!(
            to_date_string(EpochSeconds::new(-86400)).as_str(),
            "1969-12-31 00:00:00"
        );
    }

    #[test]
    fn test_all_fields_two_digits_when_single_valued() {
        // 2005-03-07 04:08:09 exercises a single-digit value in every
        // padded field at once
        let ts = Utc
            .with_ymd_and_hms(2005, 3, 7, 4, 8, 9)
            .unwrap()
            .timestamp();
        assert_eq!(
            to_date_string(EpochSeconds::new(ts)).as_str(),
            "2005-03-07 04:08:09"
        );
    }

    #[test]
    fn test_field_widths_across_digit_range() {
        for unit in 0..10i64 {
            // seconds field 0..=9 of some arbitrary minute
            let rendered = to_date_string(EpochSeconds::new(1451613780 + unit));
            let text = rendered.as_str();
            assert_eq!(text.len(), 19, "unexpected width for {text}");
            let seconds_field = &text[17..19];
            assert_eq!(seconds_field, format!("{unit:02}"));
        }
    }

    #[test]
    fn test_double_digit_fields_not_truncated() {
        let ts = Utc
            .with_ymd_and_hms(1999, 12, 31, 23, 59, 58)
            .unwrap()
            .timestamp();
        assert_eq!(
            to_date_string(EpochSeconds::new(ts)).as_str(),
            "1999-12-31 23:59:58"
        );
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let ts = EpochSeconds::new(1451613802);
        assert_eq!(to_date_string(ts), to_date_string(ts));
    }

    #[test]
    fn test_extreme_values_still_render() {
        // Outside the calendar range: clamps, never fails
        let floor = to_date_string(EpochSeconds::new(i64::MIN));
        let ceil = to_date_string(EpochSeconds::new(i64::MAX));
        assert!(floor.as_str().starts_with('-'));
        assert!(floor.as_str().ends_with(":00"));
        assert!(ceil.as_str().contains(' '));
    }

    #[test]
    fn test_wide_year_renders_unpadded() {
        // ~31,700 years after the epoch: a five-digit year, no padding
        let text = to_date_string(EpochSeconds::new(1_000_000_000_000));
        assert_eq!(text.as_str().len(), 20);
        assert!(text.as_str().chars().take(5).all(|c| c.is_ascii_digit()));
        assert_eq!(&text.as_str()[5..6], "-");
    }
}
