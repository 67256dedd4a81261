//! Year-range filtering and (year, month) bucketing of daily records.
//!
//! # Bucket Convention
//!
//! A bucket exists only for (year, month) pairs that have at least one
//! record inside the range. Consumers must treat a missing lookup as
//! "no data" rather than as a zero reading.

use crate::error::RangeError;
use crate::record::{DailyRecord, Metric};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Fixed month band order. Index = zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Closed range of calendar years, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    start: i32,
    end: i32,
}

#[derive(Deserialize)]
struct RawYearRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = RangeError;

    fn try_from(raw: RawYearRange) -> Result<Self, Self::Error> {
        YearRange::new(raw.start, raw.end)
    }
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering both years, whichever order they come in.
    pub fn spanning(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Bucket key: calendar year and zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(record: &DailyRecord) -> Self {
        Self::new(record.year, record.month)
    }

    /// "YYYY-MM" with a one-based month.
    pub fn label(&self) -> String {
        thm_utils::dates::month_label(self.year, self.month)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize % 12]
    }
}

/// Extremes of one (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyBucket {
    /// Highest daily maximum in the month
    pub max_temperature: f64,
    /// Lowest daily minimum in the month
    pub min_temperature: f64,
}

impl MonthlyBucket {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MaxTemperature => self.max_temperature,
            Metric::MinTemperature => self.min_temperature,
        }
    }

    fn seed(record: &DailyRecord) -> Self {
        Self {
            max_temperature: record.max_temperature,
            min_temperature: record.min_temperature,
        }
    }

    fn absorb(&mut self, record: &DailyRecord) {
        self.max_temperature = self.max_temperature.max(record.max_temperature);
        self.min_temperature = self.min_temperature.min(record.min_temperature);
    }
}

/// Everything the renderers need from a filtered dataset.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub buckets: HashMap<MonthKey, MonthlyBucket>,
    /// Distinct years in first-seen order (band order on the x axis)
    pub years: Vec<i32>,
    pub months: [&'static str; 12],
    /// Per-month daily rows in input order
    pub daily: HashMap<MonthKey, Vec<DailyRecord>>,
    /// Number of records inside the range
    pub record_count: usize,
}

impl Aggregation {
    pub fn bucket(&self, key: MonthKey) -> Option<&MonthlyBucket> {
        self.buckets.get(&key)
    }

    pub fn daily_group(&self, key: MonthKey) -> Option<&[DailyRecord]> {
        self.daily.get(&key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Filter `records` to `range` and group them by (year, month).
///
/// Rows are not re-sorted: years keep their first-seen order and daily
/// groups keep the order of `records`.
pub fn aggregate(records: &[DailyRecord], range: YearRange) -> Aggregation {
    let mut buckets: HashMap<MonthKey, MonthlyBucket> = HashMap::new();
    let mut daily: HashMap<MonthKey, Vec<DailyRecord>> = HashMap::new();
    let mut years = Vec::new();
    let mut seen_years = HashSet::new();
    let mut record_count = 0usize;

    for record in records.iter().filter(|r| range.contains(r.year)) {
        let key = MonthKey::of(record);
        buckets
            .entry(key)
            .and_modify(|bucket| bucket.absorb(record))
            .or_insert_with(|| MonthlyBucket::seed(record));
        daily.entry(key).or_default().push(record.clone());
        if seen_years.insert(record.year) {
            years.push(record.year);
        }
        record_count += 1;
    }

    log::debug!(
        "[THM] aggregate: {} records in {}..={} -> {} buckets over {} years",
        record_count,
        range.start(),
        range.end(),
        buckets.len(),
        years.len()
    );

    Aggregation {
        buckets,
        years,
        months: MONTH_NAMES,
        daily,
        record_count,
    }
}
