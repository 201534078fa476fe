use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::proteomic::models::protein::ProteinRecord;

/// The input is not usable as FASTA at all. There is no partial result.
#[derive(Debug, Error)]
pub enum MalformedInputError {
    #[error("could not read FASTA input")]
    Io(#[from] io::Error),
    #[error("FASTA input contains no header line")]
    NoHeader,
    #[error("sequence data in line {line} before the first header")]
    SequenceBeforeHeader { line: usize },
    #[error("header without identifier in line {line}")]
    EmptyHeader { line: usize }
}

/// Lazy FASTA reader. Sequence lines are concatenated up to the next header, whitespace is removed.
pub struct FastaReader<R: BufRead> {
    lines: io::Lines<R>,
    line_number: usize,
    next_header: Option<(String, usize)>,
    has_seen_header: bool,
    is_finished: bool
}

impl FastaReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(fasta_file_path: P) -> Result<Self, MalformedInputError> {
        let fasta_file = File::open(fasta_file_path)?;
        return Ok(Self::new(BufReader::new(fasta_file)));
    }

    /// Reads the whole file, the first error aborts.
    pub fn read_all<P: AsRef<Path>>(fasta_file_path: P) -> Result<Vec<ProteinRecord>, MalformedInputError> {
        return Self::open(fasta_file_path)?.collect();
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        return Self {
            lines: reader.lines(),
            line_number: 0,
            next_header: None,
            has_seen_header: false,
            is_finished: false
        }
    }

    fn next_line(&mut self) -> Option<io::Result<String>> {
        let line = self.lines.next();
        if line.is_some() {
            self.line_number += 1;
        }
        return line;
    }

    fn fail(&mut self, error: MalformedInputError) -> Option<Result<ProteinRecord, MalformedInputError>> {
        self.is_finished = true;
        return Some(Err(error));
    }

    fn build_record(header: &str, header_line: usize, aa_sequence: &str) -> Result<ProteinRecord, MalformedInputError> {
        match ProteinRecord::from_header(header, aa_sequence) {
            Some(protein) => Ok(protein),
            None => Err(MalformedInputError::EmptyHeader { line: header_line })
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<ProteinRecord, MalformedInputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished {
            return None;
        }
        // look for the first header
        while self.next_header.is_none() {
            let line = match self.next_line() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return self.fail(MalformedInputError::Io(err)),
                None if self.has_seen_header => {
                    self.is_finished = true;
                    return None;
                },
                None => return self.fail(MalformedInputError::NoHeader)
            };
            let trimmed_line = line.trim();
            if trimmed_line.starts_with('>') {
                self.next_header = Some((trimmed_line.to_owned(), self.line_number));
                self.has_seen_header = true;
            } else if !trimmed_line.is_empty() {
                let line_number = self.line_number;
                return self.fail(MalformedInputError::SequenceBeforeHeader { line: line_number });
            }
        }
        let (header, header_line) = match self.next_header.take() {
            Some(header) => header,
            None => return None
        };
        let mut aa_sequence = String::new();
        loop {
            let line = match self.next_line() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return self.fail(MalformedInputError::Io(err)),
                None => {
                    self.is_finished = true;
                    break;
                }
            };
            let trimmed_line = line.trim();
            if trimmed_line.starts_with('>') {
                self.next_header = Some((trimmed_line.to_owned(), self.line_number));
                break;
            }
            aa_sequence.extend(trimmed_line.chars().filter(|c| !c.is_whitespace()));
        }
        return match Self::build_record(&header, header_line, &aa_sequence) {
            Ok(protein) => Some(Ok(protein)),
            Err(err) => self.fail(err)
        };
    }
}
