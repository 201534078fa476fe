use std::fmt;

/// Contiguous part of a protein sequence, bounded by cleavage sites or the sequence ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Peptide {
    sequence: String,
    source_protein: String,
    number_of_missed_cleavages: u8
}

impl Peptide {
    pub fn new(sequence: &str, source_protein: &str, number_of_missed_cleavages: u8) -> Self {
        return Self {
            sequence: sequence.to_owned(),
            source_protein: source_protein.to_owned(),
            number_of_missed_cleavages: number_of_missed_cleavages
        }
    }

    pub fn get_sequence(&self) -> &str {
        return &self.sequence;
    }

    pub fn get_source_protein(&self) -> &str {
        return &self.source_protein;
    }

    pub fn get_length(&self) -> usize {
        return self.sequence.chars().count();
    }

    pub fn get_number_of_missed_cleavages(&self) -> u8 {
        return self.number_of_missed_cleavages;
    }

    pub fn count_residue(&self, one_letter_code: char) -> usize {
        return self.sequence.chars().filter(|residue| *residue == one_letter_code).count();
    }

    pub fn contains_residue(&self, one_letter_code: char) -> bool {
        return self.sequence.contains(one_letter_code);
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.sequence, self.source_protein)
    }
}
