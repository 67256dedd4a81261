use crate::error::ParseError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of observations, with calendar parts derived once at parse time.
///
/// `month` is zero-based (January = 0) to line up with the month band order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub max_temperature: f64,
    pub min_temperature: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, max_temperature: f64, min_temperature: f64) -> Self {
        Self {
            date,
            year: date.year(),
            month: date.month0(),
            day: date.day(),
            max_temperature,
            min_temperature,
        }
    }

    /// Parse the three raw CSV fields of a row.
    pub fn parse(date: &str, max_temperature: &str, min_temperature: &str) -> Result<Self, ParseError> {
        let date = thm_utils::dates::parse_date(date)
            .map_err(|_| ParseError::InvalidDate(date.trim().to_string()))?;
        let max_temperature = parse_temperature("max_temperature", max_temperature)?;
        let min_temperature = parse_temperature("min_temperature", min_temperature)?;
        Ok(Self::new(date, max_temperature, min_temperature))
    }
}

fn parse_temperature(column: &'static str, raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidTemperature {
            column,
            value: trimmed.to_string(),
        }),
    }
}

/// Which temperature series a view displays.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    MaxTemperature,
    MinTemperature,
}

impl Metric {
    /// Column name in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            Metric::MaxTemperature => "max_temperature",
            Metric::MinTemperature => "min_temperature",
        }
    }

    pub fn of(self, record: &DailyRecord) -> f64 {
        match self {
            Metric::MaxTemperature => record.max_temperature,
            Metric::MinTemperature => record.min_temperature,
        }
    }

    /// `(min, max)` of this metric over `records`, or `None` when empty.
    pub fn extent(self, records: &[DailyRecord]) -> Option<(f64, f64)> {
        records
            .iter()
            .map(|r| self.of(r))
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyRecord {
        DailyRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), max, min)
    }

    #[test]
    fn derived_fields_use_zero_based_month() {
        let r = day(2016, 1, 15, 8.0, -5.0);
        assert_eq!(r.year, 2016);
        assert_eq!(r.month, 0);
        assert_eq!(r.day, 15);

        let r = day(2017, 12, 31, 20.0, 12.0);
        assert_eq!(r.month, 11);
        assert_eq!(r.day, 31);
    }

    #[test]
    fn parse_accepts_padded_fields() {
        let r = DailyRecord::parse(" 2016-01-01 ", " 5.0", "-2.0 ").unwrap();
        assert_eq!(r, day(2016, 1, 1, 5.0, -2.0));
    }

    #[test]
    fn parse_reports_bad_date() {
        let err = DailyRecord::parse("2016-02-30", "5", "1").unwrap_err();
        assert_eq!(err, ParseError::InvalidDate("2016-02-30".to_string()));
    }

    #[test]
    fn parse_reports_bad_temperature_column() {
        let err = DailyRecord::parse("2016-01-01", "5", "n/a").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidTemperature {
                column: "min_temperature",
                value: "n/a".to_string()
            }
        );

        let err = DailyRecord::parse("2016-01-01", "", "1").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidTemperature { column: "max_temperature", .. }
        ));
    }

    #[test]
    fn parse_rejects_non_finite_values() {
        assert!(DailyRecord::parse("2016-01-01", "NaN", "1").is_err());
        assert!(DailyRecord::parse("2016-01-01", "5", "inf").is_err());
    }

    #[test]
    fn metric_extent() {
        let records = vec![
            day(2016, 1, 1, 5.0, -2.0),
            day(2016, 1, 15, 8.0, -5.0),
            day(1990, 7, 1, 33.5, 26.0),
        ];
        assert_eq!(Metric::MaxTemperature.extent(&records), Some((5.0, 33.5)));
        assert_eq!(Metric::MinTemperature.extent(&records), Some((-5.0, 26.0)));
        assert_eq!(Metric::MaxTemperature.extent(&[]), None);
    }

    #[test]
    fn metric_columns() {
        assert_eq!(Metric::default(), Metric::MaxTemperature);
        assert_eq!(Metric::MaxTemperature.column(), "max_temperature");
        assert_eq!(Metric::MinTemperature.column(), "min_temperature");
    }
}
