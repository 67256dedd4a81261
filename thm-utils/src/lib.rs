//! Shared utility functions for THM crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Date-only layouts accepted in the `date` column.
    const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

    /// Timestamp layouts accepted in the `date` column; the time part is dropped.
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a calendar date string.
    ///
    /// Accepts "YYYY-MM-DD", "YYYY/MM/DD" and "YYYY-MM-DD HH:MM:SS"
    /// (also with a `T` separator).
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(date);
            }
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(datetime.date());
            }
        }
        anyhow::bail!("unrecognized date '{}', expected YYYY-MM-DD", s)
    }

    /// Year-month label with a zero-based month, e.g. `(2016, 0)` -> "2016-01".
    pub fn month_label(year: i32, month0: u32) -> String {
        format!("{}-{:02}", year, month0 + 1)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2016, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2016-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_alternate_layouts() {
            let expected = NaiveDate::from_ymd_opt(2007, 12, 31).unwrap();
            assert_eq!(parse_date("2007/12/31").unwrap(), expected);
            assert_eq!(parse_date("2007-12-31 00:00:00").unwrap(), expected);
            assert_eq!(parse_date("2007-12-31T23:59:59").unwrap(), expected);
            assert_eq!(parse_date("  2007-12-31 ").unwrap(), expected);
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_date("").is_err());
            assert!(parse_date("yesterday").is_err());
            assert!(parse_date("2016-13-01").is_err());
            assert!(parse_date("2015-02-29").is_err());
        }

        #[test]
        fn test_month_label() {
            assert_eq!(month_label(2016, 0), "2016-01");
            assert_eq!(month_label(1997, 11), "1997-12");
        }
    }
}
