use crate::proteomic::models::peptide::Peptide;

pub const DEFAULT_MIN_PEPTIDE_LENGTH: usize = 7;

/// Policy applied to the digest by the caller, the enzymes themselves never drop peptides.
#[derive(Debug, Clone, PartialEq)]
pub struct PeptideFilter {
    min_peptide_length: usize,
    max_peptide_length: Option<usize>,
    required_residue: Option<char>
}

impl PeptideFilter {
    pub fn new(min_peptide_length: usize, max_peptide_length: Option<usize>) -> Self {
        return Self {
            min_peptide_length: min_peptide_length,
            max_peptide_length: max_peptide_length,
            required_residue: None
        }
    }

    /// Keeps only peptides carrying at least one lysine, the acetylation target.
    pub fn require_lysine(self) -> Self {
        return self.require_residue('K');
    }

    pub fn require_residue(mut self, one_letter_code: char) -> Self {
        self.required_residue = Some(one_letter_code);
        return self;
    }

    pub fn get_min_peptide_length(&self) -> usize {
        return self.min_peptide_length;
    }

    pub fn get_max_peptide_length(&self) -> Option<usize> {
        return self.max_peptide_length;
    }

    pub fn get_required_residue(&self) -> Option<char> {
        return self.required_residue;
    }

    pub fn is_accepted(&self, peptide: &Peptide) -> bool {
        let length = peptide.get_length();
        if length < self.min_peptide_length {
            return false;
        }
        if let Some(max_peptide_length) = self.max_peptide_length {
            if length > max_peptide_length {
                return false;
            }
        }
        return match self.required_residue {
            Some(one_letter_code) => peptide.contains_residue(one_letter_code),
            None => true
        };
    }

    pub fn apply(&self, peptides: Vec<Peptide>) -> Vec<Peptide> {
        return peptides.into_iter().filter(|peptide| self.is_accepted(peptide)).collect();
    }
}

impl Default for PeptideFilter {
    fn default() -> Self {
        return Self::new(DEFAULT_MIN_PEPTIDE_LENGTH, None);
    }
}
