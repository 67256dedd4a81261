//! Daily temperature records and their monthly aggregation.
//!
//! This crate holds the non-rendering half of the heatmap pipeline:
//! - `loader`: decode and parse the `date,max_temperature,min_temperature` CSV
//! - `aggregate`: filter to a year range and bucket by (year, month)
//! - `record`: the immutable `DailyRecord` and the `Metric` selector
//! - `error`: typed load / parse errors

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod record;

pub use aggregate::{aggregate, Aggregation, MonthKey, MonthlyBucket, YearRange, MONTH_NAMES};
pub use error::{LoadError, ParseError, RangeError};
pub use loader::{decode_payload, parse_daily_csv, LoadedDataset, RowPolicy};
pub use record::{DailyRecord, Metric};
