#[cfg(test)]
mod tests;

use crate::proteomic::models::amino_acids::amino_acid::{AminoAcid, InvalidResidueError};
use crate::proteomic::models::amino_acids::modification::ModificationProfile;

pub const PROTON_MASS: f64 = 1.007276466;
// H2O, a peptide keeps one water for its free termini
pub const WATER_MONO_MASS: f64 = 18.0105646863;
pub const HYDROGEN_MONO_MASS: f64 = 1.00782503207;
pub const DEUTERIUM_MONO_MASS: f64 = 2.0141017778;

/// Monoisotopic mass in Dalton: residue masses, water for the free termini and every
/// modification delta of the profile. Nothing is rounded here.
pub fn calculate_mono_mass(sequence: &str, profile: &ModificationProfile) -> Result<f64, InvalidResidueError> {
    let mut mass: f64 = WATER_MONO_MASS;
    for (position, one_letter_code) in sequence.chars().enumerate() {
        let amino_acid = match AminoAcid::get(one_letter_code) {
            Some(amino_acid) => amino_acid,
            None => return Err(InvalidResidueError::new(one_letter_code, position))
        };
        mass += amino_acid.get_mono_mass() + profile.get_mass_delta(one_letter_code);
    }
    return Ok(mass);
}

pub fn mass_to_mz(mass: f64, charge: u8) -> f64 {
    return (mass + charge as f64 * PROTON_MASS) / charge as f64;
}

pub fn mz_to_mass(mz: f64, charge: u8) -> f64 {
    return mz * charge as f64 - PROTON_MASS * charge as f64;
}
