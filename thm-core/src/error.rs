/// Error types for loading and aggregating temperature data
use thiserror::Error;

/// A single malformed field in a daily row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The `date` column is not a recognizable calendar date
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    /// A temperature column is empty or not a finite number
    #[error("Invalid {column}: '{value}'")]
    InvalidTemperature { column: &'static str, value: String },

    /// The row has too few fields or cannot be read as a daily row
    #[error("Malformed row: {0}")]
    Malformed(String),
}

/// The dataset could not be fetched or parsed; the chart is not drawn.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-success status
    #[error("Failed to fetch {url}: HTTP {status}")]
    Http { url: String, status: u16 },

    /// Failed to decompress a gzip payload
    #[error("Failed to decompress data: {0}")]
    Decode(#[from] std::io::Error),

    /// The payload is not UTF-8 text
    #[error("Data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Failed to read the CSV structure (header, quoting)
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks a required column
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row failed to parse under the strict row policy
    #[error("Row {line}: {source}")]
    Row { line: u64, source: ParseError },
}

/// An inverted year range.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid year range: {start} > {end}")]
pub struct RangeError {
    pub start: i32,
    pub end: i32,
}
