//! CSV loading for daily temperature data.
//!
//! The input is a header-based CSV with (at least) the columns
//! `date,max_temperature,min_temperature`, one row per day. The body may
//! arrive gzip-compressed when served as `temperature_daily.csv.gz`.

use crate::error::{LoadError, ParseError};
use crate::record::DailyRecord;
use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thm_utils::dates::format_date;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

const REQUIRED_COLUMNS: [&str; 3] = ["date", "max_temperature", "min_temperature"];

/// What to do with a row whose fields fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Drop the row, count it and keep going
    #[default]
    Skip,
    /// Abort the load on the first malformed row
    Strict,
}

/// All parsed rows of a file, in file order.
#[derive(Debug, Clone, Default)]
pub struct LoadedDataset {
    pub records: Vec<DailyRecord>,
    /// Rows dropped under [`RowPolicy::Skip`]
    pub skipped: usize,
}

/// Raw string fields of a row, before numeric/date parsing.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    max_temperature: String,
    min_temperature: String,
}

/// Turn a fetched body into CSV text, inflating it if it is gzip data.
pub fn decode_payload(bytes: Vec<u8>) -> Result<String, LoadError> {
    let bytes = if bytes.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        GzDecoder::new(bytes.as_slice()).read_to_end(&mut inflated)?;
        log::info!("[THM] loader: inflated {} gzip bytes to {}", bytes.len(), inflated.len());
        inflated
    } else {
        bytes
    };
    let text = String::from_utf8(bytes)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Parse daily temperature rows from a CSV string.
///
/// # Example CSV
/// ```text
/// date,max_temperature,min_temperature
/// 2016-01-01,5.0,-2.0
/// 2016-01-15,8.0,-5.0
/// ```
pub fn parse_daily_csv(csv_data: &str, policy: RowPolicy) -> Result<LoadedDataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());
    let headers = rdr.headers()?.clone();
    if !headers.is_empty() {
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|col| !headers.iter().any(|h| h == **col))
        {
            return Err(LoadError::MissingColumn(*missing));
        }
    }

    let mut dataset = LoadedDataset::default();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let parsed = record
            .deserialize::<RawRow>(Some(&headers))
            .map_err(|e| ParseError::Malformed(e.to_string()))
            .and_then(|raw| {
                DailyRecord::parse(&raw.date, &raw.max_temperature, &raw.min_temperature)
            });
        match parsed {
            Ok(daily) => dataset.records.push(daily),
            Err(source) => match policy {
                RowPolicy::Strict => return Err(LoadError::Row { line, source }),
                RowPolicy::Skip => {
                    log_skipped(line, &source);
                    dataset.skipped += 1;
                }
            },
        }
    }
    log::info!(
        "[THM] loader: Loaded {} daily records, skipped {} malformed",
        dataset.records.len(),
        dataset.skipped
    );
    if let (Some(first), Some(last)) = (dataset.records.first(), dataset.records.last()) {
        log::info!(
            "[THM] loader: rows span {} .. {}",
            format_date(&first.date),
            format_date(&last.date)
        );
    }
    Ok(dataset)
}

fn log_skipped(line: u64, err: &ParseError) {
    log::warn!("[THM] loader: skipping row {}: {}", line, err);
}
