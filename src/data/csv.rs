//! CSV ingestion
//!
//! Supports loading datasets from CSV files where:
//! - The last column is the label
//! - All other columns are numeric features
//! - The first row can be a header (automatically detected)
//!
//! Labels are taken verbatim; no re-encoding to ±1 happens here.

use crate::core::{ClassifierError, Dataset, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Dense dataset read from CSV
#[derive(Debug, Clone)]
pub struct CsvDataset;

impl CsvDataset {
    /// Load a dataset from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dataset from a reader, skipping a header row if present
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Dataset> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a dataset from a reader with explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Dataset> {
        let rows = read_rows(reader, auto_detect_header, 2)?;

        let mut features = Vec::with_capacity(rows.len());
        let mut labels = Vec::with_capacity(rows.len());
        for mut row in rows {
            // read_rows guarantees at least two fields
            let label = row.pop().unwrap_or_default();
            features.push(row);
            labels.push(label);
        }
        Dataset::new(features, labels)
    }

    /// Load an unlabeled feature matrix: every column is a feature
    pub fn features_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<f64>>> {
        let file = File::open(path)?;
        Self::features_from_reader(BufReader::new(file))
    }

    /// Load an unlabeled feature matrix from a reader
    pub fn features_from_reader<R: BufRead>(reader: R) -> Result<Vec<Vec<f64>>> {
        read_rows(reader, true, 1)
    }

    /// Check if a line appears to be a header
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return false;
        }

        let non_numeric_count = fields
            .iter()
            .filter(|field| field.trim().parse::<f64>().is_err())
            .count();

        non_numeric_count > fields.len() / 2
    }
}

/// Read every data row as a vector of numbers
///
/// Blank lines and `#` comments are skipped, as is the first row when it
/// looks like a header. Rows must all have the same width, at least
/// `min_fields`.
fn read_rows<R: BufRead>(
    reader: R,
    auto_detect_header: bool,
    min_fields: usize,
) -> Result<Vec<Vec<f64>>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut seen_first_row = false;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !seen_first_row {
            seen_first_row = true;
            if auto_detect_header && CsvDataset::is_header_line(line) {
                continue;
            }
        }

        let row = parse_row(line, line_no + 1)?;
        if row.len() < min_fields {
            return Err(ClassifierError::ParseError(format!(
                "line {}: expected at least {min_fields} fields, found {}",
                line_no + 1,
                row.len()
            )));
        }
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(ClassifierError::ParseError(format!(
                    "line {}: expected {} fields, found {}",
                    line_no + 1,
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ClassifierError::EmptyDataset);
    }
    Ok(rows)
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(idx, field)| parse_number(field, line_no, idx + 1))
        .collect()
}

fn parse_number(field: &str, line_no: usize, column: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|_| {
        ClassifierError::ParseError(format!(
            "line {line_no}, column {column}: invalid number '{field}'"
        ))
    })
}
