use std::path::Path;

use crate::proteomic::models::coverage::MzWindow;
use crate::proteomic::utility::{get_column_index, parse_field, TableError};

pub const START_MZ_COLUMN: &str = "start_mz";
pub const STOP_MZ_COLUMN: &str = "stop_mz";

/// Reads acquisition windows from a CSV file with the columns `start_mz` and `stop_mz`.
/// Other columns are ignored, the row order is kept.
pub fn read_windows<P: AsRef<Path>>(window_file_path: P) -> Result<Vec<MzWindow>, TableError> {
    let path = window_file_path.as_ref().display().to_string();
    let mut reader = match csv::Reader::from_path(window_file_path.as_ref()) {
        Ok(reader) => reader,
        Err(err) => return Err(TableError::Read { path: path, source: err })
    };
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => return Err(TableError::Read { path: path, source: err })
    };
    let start_mz_idx = get_column_index(&headers, START_MZ_COLUMN, &path)?;
    let stop_mz_idx = get_column_index(&headers, STOP_MZ_COLUMN, &path)?;
    let mut windows: Vec<MzWindow> = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => return Err(TableError::Read { path: path, source: err })
        };
        let start_mz: f64 = parse_field(&row, start_mz_idx, START_MZ_COLUMN, &path)?;
        let stop_mz: f64 = parse_field(&row, stop_mz_idx, STOP_MZ_COLUMN, &path)?;
        match MzWindow::new(start_mz, stop_mz) {
            Ok(window) => windows.push(window),
            Err(err) => {
                let line = row.position().map(|position| position.line()).unwrap_or(0);
                return Err(TableError::InvalidWindow { path: path, line: line, source: err });
            }
        }
    }
    return Ok(windows);
}
