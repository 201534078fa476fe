use std::fmt;

use once_cell::sync::Lazy;

// UniProt accession, see https://www.uniprot.org/help/accession_numbers
const ACCESSION_PATTERN: &str = r"[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2}";

static ACCESSION_REGEX: Lazy<Option<onig::Regex>> = Lazy::new(|| onig::Regex::new(ACCESSION_PATTERN).ok());

/// One FASTA entry. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProteinRecord {
    identifier: String,
    description: String,
    sequence: String
}

impl ProteinRecord {
    pub fn new(identifier: &str, description: &str, sequence: &str) -> Self {
        return Self {
            identifier: identifier.to_owned(),
            description: description.to_owned(),
            sequence: sequence.to_owned()
        }
    }

    /// Splits a header line (with or without the leading '>') into identifier and description.
    /// Returns `None` if the header carries no identifier.
    pub fn from_header(header: &str, sequence: &str) -> Option<Self> {
        let header = header.trim();
        let header = header.strip_prefix('>').unwrap_or(header).trim_start();
        let mut parts = header.splitn(2, char::is_whitespace);
        let identifier = match parts.next() {
            Some(identifier) if !identifier.is_empty() => identifier,
            _ => return None
        };
        let description = parts.next().unwrap_or("").trim();
        return Some(Self::new(identifier, description, sequence));
    }

    pub fn get_identifier(&self) -> &str {
        return &self.identifier;
    }

    pub fn get_description(&self) -> &str {
        return &self.description;
    }

    pub fn get_sequence(&self) -> &str {
        return &self.sequence;
    }

    pub fn get_header(&self) -> String {
        if self.description.is_empty() {
            return format!(">{}", self.identifier);
        }
        return format!(">{} {}", self.identifier, self.description);
    }

    /// UniProt accession found in the identifier, e.g. `P77377` for `sp|P77377|WZXC_ECOLI`.
    /// Falls back to the whole identifier for non UniProt databases.
    pub fn get_accession(&self) -> String {
        let accession = match ACCESSION_REGEX.as_ref() {
            Some(accession_regex) => accession_regex.find(&self.identifier).map(|(beg, end)| self.identifier[beg..end].to_owned()),
            None => None
        };
        return accession.unwrap_or_else(|| self.identifier.clone());
    }

    pub fn as_fasta_entry(&self) -> String {
        return format!("{}\n{}\n", self.get_header(), self.sequence);
    }
}

impl fmt::Display for ProteinRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n\tlen => {}", self.identifier, self.sequence.len())
    }
}
