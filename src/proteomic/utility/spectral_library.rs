use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::proteomic::utility::{get_column_index, parse_field, TableError};

pub const PRECURSOR_CHARGE_COLUMN: &str = "PrecursorCharge";
pub const PRECURSOR_MZ_COLUMN: &str = "PrecursorMz";
pub const STRIPPED_PEPTIDE_COLUMN: &str = "StrippedPeptide";
pub const MODIFIED_PEPTIDE_COLUMN: &str = "ModifiedPeptide";
pub const LABELED_PEPTIDE_COLUMN: &str = "LabeledPeptide";
pub const PROTEIN_GROUPS_COLUMN: &str = "ProteinGroups";

const ACETYL_LYSINE_MARKER: &str = "K[Acetyl";

/// One precursor of a spectral library export.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralLibraryEntry {
    precursor_charge: u8,
    precursor_mz: f64,
    stripped_peptide: String,
    modified_peptide: String,
    labeled_peptide: String,
    protein_groups: String
}

impl SpectralLibraryEntry {
    pub fn new(precursor_charge: u8, precursor_mz: f64, stripped_peptide: &str, modified_peptide: &str, labeled_peptide: &str, protein_groups: &str) -> Self {
        return Self {
            precursor_charge: precursor_charge,
            precursor_mz: precursor_mz,
            stripped_peptide: stripped_peptide.to_owned(),
            modified_peptide: modified_peptide.to_owned(),
            labeled_peptide: labeled_peptide.to_owned(),
            protein_groups: protein_groups.to_owned()
        }
    }

    pub fn get_precursor_charge(&self) -> u8 {
        return self.precursor_charge;
    }

    pub fn get_precursor_mz(&self) -> f64 {
        return self.precursor_mz;
    }

    pub fn get_stripped_peptide(&self) -> &str {
        return &self.stripped_peptide;
    }

    pub fn get_modified_peptide(&self) -> &str {
        return &self.modified_peptide;
    }

    pub fn get_labeled_peptide(&self) -> &str {
        return &self.labeled_peptide;
    }

    pub fn get_protein_groups(&self) -> &str {
        return &self.protein_groups;
    }

    pub fn is_lysine_acetylated(&self) -> bool {
        return self.modified_peptide.contains(ACETYL_LYSINE_MARKER);
    }
}

/// Reads a tab separated library. Libraries list every precursor once per fragment ion,
/// so only the first row of each (labeled peptide, charge) pair is kept.
pub fn read_spectral_library<P: AsRef<Path>>(library_file_path: P) -> Result<Vec<SpectralLibraryEntry>, TableError> {
    let path = library_file_path.as_ref().display().to_string();
    let mut reader = match csv::ReaderBuilder::new().delimiter(b'\t').flexible(true).from_path(library_file_path.as_ref()) {
        Ok(reader) => reader,
        Err(err) => return Err(TableError::Read { path: path, source: err })
    };
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => return Err(TableError::Read { path: path, source: err })
    };
    let charge_idx = get_column_index(&headers, PRECURSOR_CHARGE_COLUMN, &path)?;
    let mz_idx = get_column_index(&headers, PRECURSOR_MZ_COLUMN, &path)?;
    let stripped_peptide_idx = get_column_index(&headers, STRIPPED_PEPTIDE_COLUMN, &path)?;
    let modified_peptide_idx = get_column_index(&headers, MODIFIED_PEPTIDE_COLUMN, &path)?;
    let labeled_peptide_idx = get_column_index(&headers, LABELED_PEPTIDE_COLUMN, &path)?;
    let protein_groups_idx = get_column_index(&headers, PROTEIN_GROUPS_COLUMN, &path)?;

    let mut seen_precursors: HashSet<(String, u8)> = HashSet::new();
    let mut entries: Vec<SpectralLibraryEntry> = Vec::new();
    let mut number_of_rows: usize = 0;
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => return Err(TableError::Read { path: path, source: err })
        };
        number_of_rows += 1;
        let labeled_peptide = row.get(labeled_peptide_idx).unwrap_or("").trim();
        let precursor_charge: u8 = parse_field(&row, charge_idx, PRECURSOR_CHARGE_COLUMN, &path)?;
        if !seen_precursors.insert((labeled_peptide.to_owned(), precursor_charge)) {
            continue;
        }
        let precursor_mz: f64 = parse_field(&row, mz_idx, PRECURSOR_MZ_COLUMN, &path)?;
        entries.push(SpectralLibraryEntry::new(
            precursor_charge,
            precursor_mz,
            row.get(stripped_peptide_idx).unwrap_or("").trim(),
            row.get(modified_peptide_idx).unwrap_or("").trim(),
            labeled_peptide,
            row.get(protein_groups_idx).unwrap_or("").trim()
        ));
    }
    debug!("{}: {} rows, {} distinct precursors", path, number_of_rows, entries.len());
    return Ok(entries);
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const LIBRARY: &str = "PrecursorCharge\tPrecursorMz\tFragmentMz\tStrippedPeptide\tModifiedPeptide\tLabeledPeptide\tProteinGroups\n\
        2\t501.5\t200.1\tAAAAAAK\t_AAAAAAK[Acetyl (K)]_\t_AAAAAAK[Acetyl (K)]_\tP12345\n\
        2\t501.5\t300.2\tAAAAAAK\t_AAAAAAK[Acetyl (K)]_\t_AAAAAAK[Acetyl (K)]_\tP12345\n\
        3\t334.6\t200.1\tAAAAAAK\t_AAAAAAK[Acetyl (K)]_\t_AAAAAAK[Acetyl (K)]_\tP12345\n\
        2\t480.3\t250.0\tLLLLLLR\t_LLLLLLR_\t_LLLLLLR_\tQ99999;P12345\n";

    fn write_library(content: &str) -> tempfile::NamedTempFile {
        let mut library_file = tempfile::NamedTempFile::new().unwrap();
        library_file.write_all(content.as_bytes()).unwrap();
        return library_file;
    }

    #[test]
    fn test_entries_are_deduplicated_per_precursor() {
        let library_file = write_library(LIBRARY);
        let entries = read_spectral_library(library_file.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].get_precursor_charge(), 2);
        assert_eq!(entries[1].get_precursor_charge(), 3);
        assert_eq!(entries[2].get_stripped_peptide(), "LLLLLLR");
        assert_eq!(entries[2].get_protein_groups(), "Q99999;P12345");
        assert_eq!(entries.iter().map(|entry| entry.get_precursor_mz()).collect::<Vec<f64>>(), vec![501.5, 334.6, 480.3]);
    }

    #[test]
    fn test_lysine_acetylation() {
        let library_file = write_library(LIBRARY);
        let entries = read_spectral_library(library_file.path()).unwrap();
        let acetylated: Vec<&SpectralLibraryEntry> = entries.iter().filter(|entry| entry.is_lysine_acetylated()).collect();
        assert_eq!(acetylated.len(), 2);
        assert!(!entries[2].is_lysine_acetylated());
    }

    #[test]
    fn test_missing_column() {
        let library_file = write_library("PrecursorCharge\tPrecursorMz\n2\t500.0\n");
        match read_spectral_library(library_file.path()) {
            Err(TableError::MissingColumn { column, .. }) => assert_eq!(column, STRIPPED_PEPTIDE_COLUMN),
            other => panic!("expected missing column, got {:?}", other)
        }
    }
}
