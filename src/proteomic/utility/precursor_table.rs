use std::io;
use std::path::Path;

use crate::proteomic::models::precursor::PrecursorObservation;
use crate::proteomic::utility::{get_column_index, parse_field, TableError};

pub const HEADER: [&str; 7] = ["protein", "peptide", "missed_cleavages", "modifications", "monoisotopic_mass", "charge", "mz"];
pub const MZ_COLUMN: &str = "mz";

/// Writes one row per observation, in the given order.
pub fn write_observations<W: io::Write>(writer: W, observations: &[PrecursorObservation], path: &str) -> Result<(), TableError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if let Err(err) = csv_writer.write_record(&HEADER) {
        return Err(TableError::Write { path: path.to_owned(), source: err });
    }
    for observation in observations.iter() {
        let peptide = observation.get_peptide();
        let row = [
            peptide.get_source_protein().to_owned(),
            peptide.get_sequence().to_owned(),
            peptide.get_number_of_missed_cleavages().to_string(),
            observation.get_modification_profile().to_string(),
            observation.get_monoisotopic_mass().to_string(),
            observation.get_charge().to_string(),
            observation.get_mz().to_string()
        ];
        if let Err(err) = csv_writer.write_record(&row) {
            return Err(TableError::Write { path: path.to_owned(), source: err });
        }
    }
    return match csv_writer.flush() {
        Ok(_) => Ok(()),
        Err(err) => Err(TableError::Io { path: path.to_owned(), source: err })
    };
}

pub fn write_observations_to_file<P: AsRef<Path>>(precursor_file_path: P, observations: &[PrecursorObservation]) -> Result<(), TableError> {
    let path = precursor_file_path.as_ref().display().to_string();
    let precursor_file = match std::fs::File::create(precursor_file_path.as_ref()) {
        Ok(file) => file,
        Err(err) => return Err(TableError::Io { path: path, source: err })
    };
    return write_observations(io::BufWriter::new(precursor_file), observations, &path);
}

/// Reads the `mz` column of a precursor table, e.g. one written by `write_observations_to_file`.
pub fn read_mz_values<P: AsRef<Path>>(precursor_file_path: P) -> Result<Vec<f64>, TableError> {
    let path = precursor_file_path.as_ref().display().to_string();
    let mut reader = match csv::Reader::from_path(precursor_file_path.as_ref()) {
        Ok(reader) => reader,
        Err(err) => return Err(TableError::Read { path: path, source: err })
    };
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => return Err(TableError::Read { path: path, source: err })
    };
    let mz_idx = get_column_index(&headers, MZ_COLUMN, &path)?;
    let mut mz_values: Vec<f64> = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => return Err(TableError::Read { path: path, source: err })
        };
        mz_values.push(parse_field(&row, mz_idx, MZ_COLUMN, &path)?);
    }
    return Ok(mz_values);
}
