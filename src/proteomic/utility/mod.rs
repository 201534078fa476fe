pub mod input_file_reader;
pub mod logger;
pub mod precursor_estimator;
pub mod coverage_aggregator;
pub mod window_table;
pub mod spectral_library;
pub mod precursor_table;
pub mod coverage_table;

use std::io;

use thiserror::Error;

use crate::proteomic::models::coverage::WindowError;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("could not read table {path}")]
    Read {
        path: String,
        #[source]
        source: csv::Error
    },
    #[error("could not write table {path}")]
    Write {
        path: String,
        #[source]
        source: csv::Error
    },
    #[error("could not access table {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("table {path} has no column '{column}'")]
    MissingColumn { path: String, column: String },
    #[error("invalid value '{value}' in column '{column}' of {path}, line {line}")]
    InvalidValue { path: String, column: String, value: String, line: u64 },
    #[error("invalid window in {path}, line {line}")]
    InvalidWindow {
        path: String,
        line: u64,
        #[source]
        source: WindowError
    }
}

/// Position of a column by its header name, header names are trimmed before comparison.
pub fn get_column_index(headers: &csv::StringRecord, column: &str, path: &str) -> Result<usize, TableError> {
    match headers.iter().position(|header| header.trim() == column) {
        Some(idx) => Ok(idx),
        None => Err(TableError::MissingColumn { path: path.to_owned(), column: column.to_owned() })
    }
}

/// Parses one field, the line is only used for the error message.
pub fn parse_field<T: std::str::FromStr>(record: &csv::StringRecord, idx: usize, column: &str, path: &str) -> Result<T, TableError> {
    let value = record.get(idx).unwrap_or("").trim();
    let line = record.position().map(|position| position.line()).unwrap_or(0);
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(TableError::InvalidValue { path: path.to_owned(), column: column.to_owned(), value: value.to_owned(), line: line })
    }
}
