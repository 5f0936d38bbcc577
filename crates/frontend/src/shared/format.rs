//! Date display helpers. Entity timestamps are `DateTime<Utc>`; these
//! produce the short forms the pages show.

use chrono::{DateTime, Utc};

/// "Jan 15, 2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// "Jan 15, 2024 10:30"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&dt), "Jan 15, 2024");
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime(&dt), "Dec 31, 2024 23:59");
    }
}
