//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for status snapshots and activity records.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp in the classic `ctime` layout (`Mon Oct 19 08:00:00 2026`).
#[must_use]
pub fn format_ctime(ts: Timestamp) -> String {
    ts.format("%a %b %e %H:%M:%S %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_like_ctime() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 9).unwrap();
        assert_eq!(format_ctime(ts), "Mon Oct 19 08:05:09 2026");
    }

    #[test]
    fn should_pad_single_digit_day_with_space() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 2, 22, 0, 0).unwrap();
        assert_eq!(format_ctime(ts), "Mon Mar  2 22:00:00 2026");
    }
}
