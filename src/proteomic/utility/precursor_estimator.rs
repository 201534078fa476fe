use std::fmt;

use thiserror::Error;

use crate::proteomic::models::amino_acids::modification::ModificationProfile;
use crate::proteomic::models::enzyms::EnzymeKind;
use crate::proteomic::models::peptide::Peptide;
use crate::proteomic::models::precursor::PrecursorObservation;
pub use crate::proteomic::models::precursor::{is_retained_charge, RETAINED_CHARGES};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown charge mode '{0}', expected 'estimated' or 'all'")]
pub struct UnknownChargeModeError(String);

/// Residues which are assumed to carry a proton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicResidues {
    /// K, R and H, tryptic peptides with free lysines
    LysineArginineHistidine,
    /// R and H, the acetyl group neutralizes lysine
    ArginineHistidine
}

impl BasicResidues {
    pub fn for_enzyme(enzym_kind: EnzymeKind) -> Self {
        return match enzym_kind {
            EnzymeKind::Trypsin => BasicResidues::LysineArginineHistidine,
            EnzymeKind::ArgC => BasicResidues::ArginineHistidine
        }
    }

    pub fn get_residues(&self) -> &'static [char] {
        return match self {
            BasicResidues::LysineArginineHistidine => &['K', 'R', 'H'],
            BasicResidues::ArginineHistidine => &['R', 'H']
        }
    }

    pub fn contains(&self, one_letter_code: char) -> bool {
        return self.get_residues().contains(&one_letter_code);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeMode {
    /// one observation with the estimated charge, if it is retained
    Estimated,
    /// one observation per retained charge state
    AllRetained
}

impl ChargeMode {
    pub fn from_name(name: &str) -> Result<Self, UnknownChargeModeError> {
        match name.trim().to_lowercase().as_str() {
            "estimated" => Ok(ChargeMode::Estimated),
            "all" => Ok(ChargeMode::AllRetained),
            _ => Err(UnknownChargeModeError(name.to_owned()))
        }
    }
}

impl fmt::Display for ChargeMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChargeMode::Estimated => write!(f, "estimated"),
            ChargeMode::AllRetained => write!(f, "all")
        }
    }
}

/// Heuristic: one proton at the N-terminus plus one for every basic residue.
pub fn estimate_charge(aa_sequence: &str, basic_residues: BasicResidues) -> usize {
    return 1 + aa_sequence.chars().filter(|one_letter_code| basic_residues.contains(*one_letter_code)).count();
}

pub fn get_charges(aa_sequence: &str, basic_residues: BasicResidues, charge_mode: ChargeMode) -> Vec<u8> {
    match charge_mode {
        ChargeMode::Estimated => {
            let charge = estimate_charge(aa_sequence, basic_residues);
            if is_retained_charge(charge) {
                return vec![charge as u8];
            }
            return Vec::new();
        },
        ChargeMode::AllRetained => RETAINED_CHARGES.to_vec()
    }
}

/// Zero, one or two observations for the peptide, depending on the charge mode.
/// `get_charges` yields retained charges only, so no observation is rejected here.
pub fn estimate_precursors(peptide: &Peptide, modification_profile: &ModificationProfile, monoisotopic_mass: f64, basic_residues: BasicResidues, charge_mode: ChargeMode) -> Vec<PrecursorObservation> {
    return get_charges(peptide.get_sequence(), basic_residues, charge_mode).into_iter()
        .filter_map(|charge| PrecursorObservation::new(peptide.clone(), modification_profile.clone(), monoisotopic_mass, charge).ok())
        .collect();
}
