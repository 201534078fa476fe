use thiserror::Error;

use crate::proteomic::models::amino_acids::modification::ModificationProfile;
use crate::proteomic::models::mass;
use crate::proteomic::models::peptide::Peptide;

/// Only these charge states are used downstream, everything else is dropped.
pub const RETAINED_CHARGES: [u8; 2] = [2, 3];

#[derive(Debug, Clone, PartialEq, Error)]
#[error("charge {charge} of {sequence} is not a retained charge state (2 or 3)")]
pub struct InvalidChargeError {
    sequence: String,
    charge: u8
}

impl InvalidChargeError {
    pub fn get_charge(&self) -> u8 {
        return self.charge;
    }
}

pub fn is_retained_charge(charge: usize) -> bool {
    return RETAINED_CHARGES.iter().any(|retained_charge| *retained_charge as usize == charge);
}

/// A peptide ion as it would be picked for fragmentation.
/// `mz` is always derived from mass and charge, never set on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecursorObservation {
    peptide: Peptide,
    modification_profile: ModificationProfile,
    monoisotopic_mass: f64,
    charge: u8,
    mz: f64
}

impl PrecursorObservation {
    pub fn new(peptide: Peptide, modification_profile: ModificationProfile, monoisotopic_mass: f64, charge: u8) -> Result<Self, InvalidChargeError> {
        if !is_retained_charge(charge as usize) {
            return Err(InvalidChargeError { sequence: peptide.get_sequence().to_owned(), charge: charge });
        }
        return Ok(Self {
            peptide: peptide,
            modification_profile: modification_profile,
            monoisotopic_mass: monoisotopic_mass,
            charge: charge,
            mz: mass::mass_to_mz(monoisotopic_mass, charge)
        });
    }

    pub fn get_peptide(&self) -> &Peptide {
        return &self.peptide;
    }

    pub fn get_modification_profile(&self) -> &ModificationProfile {
        return &self.modification_profile;
    }

    pub fn get_monoisotopic_mass(&self) -> f64 {
        return self.monoisotopic_mass;
    }

    pub fn get_charge(&self) -> u8 {
        return self.charge;
    }

    pub fn get_mz(&self) -> f64 {
        return self.mz;
    }
}
