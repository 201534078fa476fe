use std::fs::{File, OpenOptions};
use std::io::prelude::*;
use std::io::{self, LineWriter};
use std::path::Path;

use tracing::error;

use crate::proteomic::models::protein::ProteinRecord;

/// Writes proteins which were dropped by the pipeline as FASTA, so they can be inspected or fed in again after fixing.
pub struct RejectedProteinLogger {
    log_file_path: String,
    log_file: LineWriter<File>,
    number_of_proteins: usize
}

impl RejectedProteinLogger {
    /// Truncates an existing file.
    pub fn new<P: AsRef<Path>>(log_file_path: P) -> io::Result<Self> {
        let log_file = OpenOptions::new().write(true).create(true).truncate(true).open(log_file_path.as_ref())?;
        return Ok(Self {
            log_file_path: log_file_path.as_ref().display().to_string(),
            log_file: LineWriter::new(log_file),
            number_of_proteins: 0
        });
    }

    pub fn write(&mut self, protein: &ProteinRecord) -> io::Result<()> {
        self.log_file.write_all(protein.as_fasta_entry().as_bytes())?;
        self.number_of_proteins += 1;
        return Ok(());
    }

    pub fn flush(&mut self) -> io::Result<()> {
        return self.log_file.flush();
    }

    pub fn get_number_of_proteins(&self) -> usize {
        return self.number_of_proteins;
    }
}

impl Drop for RejectedProteinLogger {
    fn drop(&mut self) {
        if let Err(err) = self.flush() {
            error!("could not flush {}: {}", self.log_file_path, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proteomic::utility::input_file_reader::fasta_reader::FastaReader;

    #[test]
    fn test_rejected_proteins_are_readable_fasta() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join("rejected.fasta");
        let proteins = vec![
            ProteinRecord::new("sp|P00001|BROKEN_HUMAN", "Broken protein", "MKXAAAK"),
            ProteinRecord::new("sp|P00002|BROKEN_MOUSE", "", "MKBZR")
        ];
        {
            let mut logger = RejectedProteinLogger::new(&log_file_path).unwrap();
            for protein in proteins.iter() {
                logger.write(protein).unwrap();
            }
            assert_eq!(logger.get_number_of_proteins(), 2);
        }
        let read_proteins = FastaReader::read_all(&log_file_path).unwrap();
        assert_eq!(read_proteins, proteins);
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join("rejected.fasta");
        std::fs::write(&log_file_path, ">old entry\nAAAA\n>another one\nKKKK\n").unwrap();
        {
            let mut logger = RejectedProteinLogger::new(&log_file_path).unwrap();
            logger.write(&ProteinRecord::new("new", "", "MXK")).unwrap();
        }
        assert_eq!(std::fs::read_to_string(&log_file_path).unwrap(), ">new\nMXK\n");
    }
}
