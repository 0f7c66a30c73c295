//! CSV ingestion for usage history and inventory snapshots
//!
//! Raw exports from POS systems arrive messy: item names padded with
//! stray spaces, dates sometimes left as Excel serial numbers, waste
//! percentages missing on slow days. Cleaning happens here so the core
//! only ever sees well-formed records:
//!
//! - dates parse as `YYYY-MM-DD`, or as Excel serial day numbers
//!   (origin 1899-12-30) when the cell is a plain integer
//! - item names are trimmed and inner whitespace runs collapse to one space
//! - missing `waste_pct` values fill with the column median, missing
//!   `stock` with 0
//! - each history record is annotated with a weekend flag
//!
//! A row that cannot be parsed rejects the whole file with the line number.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::core::models::{StockLevel, UsageRecord};

/// Errors that can occur while ingesting a CSV file
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read
    #[error("cannot read {path}: {detail}")]
    Io {
        /// The file that failed
        path: String,
        /// The underlying error
        detail: String,
    },

    /// The CSV structure itself is malformed
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("missing column: {0}")]
    MissingColumn(&'static str),

    /// A date cell is neither `YYYY-MM-DD` nor an Excel serial number
    #[error("line {line}: invalid date: {value}")]
    BadDate {
        /// 1-based line in the file
        line: u64,
        /// The cell content
        value: String,
    },

    /// A numeric cell could not be parsed
    #[error("line {line}: invalid {column} value: {value}")]
    BadNumber {
        /// 1-based line in the file
        line: u64,
        /// The column the cell belongs to
        column: &'static str,
        /// The cell content
        value: String,
    },
}

/// Load and clean a usage history file
pub fn load_history(path: &Path) -> Result<Vec<UsageRecord>, IngestError> {
    let file = open(path)?;
    read_history(file)
}

/// Load and clean an inventory snapshot file
pub fn load_inventory(path: &Path) -> Result<Vec<StockLevel>, IngestError> {
    let file = open(path)?;
    read_inventory(file)
}

/// Read and clean usage history from any reader
///
/// Expected columns: `date,item,quantity` with an optional `waste_pct`.
pub fn read_history<R: Read>(reader: R) -> Result<Vec<UsageRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let date_col = column(&headers, "date")?;
    let item_col = column(&headers, "item")?;
    let quantity_col = column(&headers, "quantity")?;
    let waste_col = find_column(&headers, "waste_pct");

    // First pass keeps waste_pct optional; the median fill needs the
    // whole column before any blank can be resolved.
    let mut rows: Vec<(NaiveDate, String, f64, Option<f64>)> = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let date = parse_date(record.get(date_col).unwrap_or(""), line)?;
        let item = clean_name(record.get(item_col).unwrap_or(""));
        let quantity = parse_number(record.get(quantity_col).unwrap_or(""), "quantity", line)?;

        let waste = match waste_col.map(|c| record.get(c).unwrap_or("")) {
            None | Some("") => None,
            Some(raw) => Some(parse_number(raw, "waste_pct", line)?),
        };

        rows.push((date, item, quantity, waste));
    }

    let fill = median(rows.iter().filter_map(|(_, _, _, w)| *w));
    let filled = rows.iter().filter(|(_, _, _, w)| w.is_none()).count();
    if filled > 0 {
        debug!("filled {filled} missing waste_pct value(s) with median {fill}");
    }

    Ok(rows
        .into_iter()
        .map(|(date, item, quantity, waste)| UsageRecord {
            date,
            item,
            quantity,
            waste_pct: waste.unwrap_or(fill),
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        })
        .collect())
}

/// Read and clean an inventory snapshot from any reader
///
/// Expected columns: `item,stock,threshold`. A blank stock cell reads as 0.
pub fn read_inventory<R: Read>(reader: R) -> Result<Vec<StockLevel>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let item_col = column(&headers, "item")?;
    let stock_col = column(&headers, "stock")?;
    let threshold_col = column(&headers, "threshold")?;

    let mut levels = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let stock = match record.get(stock_col).unwrap_or("") {
            "" => 0.0,
            raw => parse_number(raw, "stock", line)?,
        };

        levels.push(StockLevel {
            item: clean_name(record.get(item_col).unwrap_or("")),
            stock,
            threshold: parse_number(record.get(threshold_col).unwrap_or(""), "threshold", line)?,
        });
    }

    Ok(levels)
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

/// Index of a required header column (case-insensitive)
fn column(headers: &csv::StringRecord, name: &'static str) -> Result<usize, IngestError> {
    find_column(headers, name).ok_or(IngestError::MissingColumn(name))
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Parse `YYYY-MM-DD`, falling back to Excel serial day numbers
fn parse_date(raw: &str, line: u64) -> Result<NaiveDate, IngestError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    // Excel counts days from 1899-12-30
    if let Ok(serial) = raw.parse::<i64>() {
        if let Some(origin) = NaiveDate::from_ymd_opt(1899, 12, 30) {
            return Ok(origin + Duration::days(serial));
        }
    }

    Err(IngestError::BadDate {
        line,
        value: raw.to_string(),
    })
}

fn parse_number(raw: &str, column: &'static str, line: u64) -> Result<f64, IngestError> {
    raw.parse::<f64>().map_err(|_| IngestError::BadNumber {
        line,
        column,
        value: raw.to_string(),
    })
}

/// Trim and collapse inner whitespace runs to a single space
fn clean_name(raw: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("literal regex"));
    re.replace_all(raw.trim(), " ").to_string()
}

/// Median of the present values; 0 when the column is entirely blank
fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
