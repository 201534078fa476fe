use crate::proteomic::models::amino_acids::amino_acid::{AminoAcid, InvalidResidueError};
use crate::proteomic::models::enzyms::EnzymeKind;
use crate::proteomic::models::peptide::Peptide;
use crate::proteomic::models::protein::ProteinRecord;

pub trait DigestEnzym {
    fn get_kind(&self) -> EnzymeKind;
    fn get_max_number_of_missed_cleavages(&self) -> u8;
    fn respects_proline_rule(&self) -> bool;
    /// Zero width regex matching every cleavage site.
    fn get_digest_regex(&self) -> &onig::Regex;

    fn get_name(&self) -> &'static str {
        return self.get_kind().get_name();
    }

    /// Maximal runs between consecutive cleavage sites (or the sequence ends), in sequence order.
    fn split_at_cleavage_sites<'s>(&self, aa_sequence: &'s str) -> Vec<&'s str> {
        return self.get_digest_regex().split(aa_sequence).filter(|peptide| !peptide.is_empty()).collect();
    }

    /// Emits every candidate peptide with up to `max_number_of_missed_cleavages` uncut sites.
    /// Length and residue filters are up to the caller.
    fn digest(&self, protein: &ProteinRecord) -> Result<Vec<Peptide>, InvalidResidueError> {
        AminoAcid::validate_sequence(protein.get_sequence())?;
        let peptides_without_missed_cleavages: Vec<&str> = self.split_at_cleavage_sites(protein.get_sequence());
        let mut peptides: Vec<Peptide> = Vec::new();
        // join each run with its following runs, +1 because the upper bound is inclusive
        for peptide_idx in 0..peptides_without_missed_cleavages.len() {
            let mut new_peptide_aa_sequence: String = String::new();
            for number_of_missed_cleavages in 0..(self.get_max_number_of_missed_cleavages() as usize + 1) {
                let temp_idx: usize = peptide_idx + number_of_missed_cleavages;
                if temp_idx >= peptides_without_missed_cleavages.len() {
                    break;
                }
                new_peptide_aa_sequence.push_str(peptides_without_missed_cleavages[temp_idx]);
                peptides.push(Peptide::new(&new_peptide_aa_sequence, protein.get_identifier(), number_of_missed_cleavages as u8));
            }
        }
        return Ok(peptides);
    }
}
