use crate::proteomic::models::amino_acids::modification::ModificationProfile;
use crate::proteomic::models::enzyms::EnzymeKind;
use crate::proteomic::models::mass;
use crate::proteomic::tasks::{self, TaskError};
use crate::proteomic::utility::precursor_estimator::{self, BasicResidues, RETAINED_CHARGES};

pub struct SequenceMassArguments {
    sequence: String,
    enzym_kind: EnzymeKind,
    modification_profile: ModificationProfile
}

impl SequenceMassArguments {
    pub fn new(sequence: &str, enzym_kind: EnzymeKind, modification_profile: ModificationProfile) -> Self {
        return Self {
            sequence: sequence.trim().to_owned(),
            enzym_kind: enzym_kind,
            modification_profile: modification_profile
        }
    }

    pub fn get_sequence(&self) -> &str {
        return self.sequence.as_str();
    }

    pub fn get_enzym_kind(&self) -> EnzymeKind {
        return self.enzym_kind;
    }

    pub fn get_modification_profile(&self) -> &ModificationProfile {
        return &self.modification_profile;
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self, TaskError> {
        let sequence = tasks::get_required_argument(cli_args, "SEQUENCE", "sequence")?;
        return Ok(Self::new(sequence, tasks::get_enzym_kind(cli_args)?, tasks::get_modification_profile(cli_args)?));
    }
}

pub struct SequenceMass {
    monoisotopic_mass: f64,
    estimated_charge: usize,
    mz_per_charge: Vec<(u8, f64)>
}

impl SequenceMass {
    pub fn get_monoisotopic_mass(&self) -> f64 {
        return self.monoisotopic_mass;
    }

    pub fn get_estimated_charge(&self) -> usize {
        return self.estimated_charge;
    }

    /// m/z for each retained charge state.
    pub fn get_mz_per_charge(&self) -> &[(u8, f64)] {
        return &self.mz_per_charge;
    }
}

pub fn calculate_sequence_mass(sequence_mass_args: &SequenceMassArguments) -> Result<SequenceMass, TaskError> {
    let monoisotopic_mass = mass::calculate_mono_mass(sequence_mass_args.get_sequence(), sequence_mass_args.get_modification_profile())?;
    let basic_residues = BasicResidues::for_enzyme(sequence_mass_args.get_enzym_kind());
    return Ok(SequenceMass {
        monoisotopic_mass: monoisotopic_mass,
        estimated_charge: precursor_estimator::estimate_charge(sequence_mass_args.get_sequence(), basic_residues),
        mz_per_charge: RETAINED_CHARGES.iter().map(|charge| (*charge, mass::mass_to_mz(monoisotopic_mass, *charge))).collect()
    });
}

pub fn sequence_mass_task(sequence_mass_args: &SequenceMassArguments) -> Result<(), TaskError> {
    let sequence_mass = calculate_sequence_mass(sequence_mass_args)?;
    println!(
        "sequence '{}' ({}) has a mass of {} Da, estimated charge {}",
        sequence_mass_args.get_sequence(),
        sequence_mass_args.get_modification_profile(),
        sequence_mass.get_monoisotopic_mass(),
        sequence_mass.get_estimated_charge()
    );
    for (charge, mz) in sequence_mass.get_mz_per_charge().iter() {
        println!("\t{}+ => {} m/z", charge, mz);
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proteomic::models::amino_acids::modification::IsotopeLabel;

    #[test]
    fn test_calculate_sequence_mass() {
        let arguments = SequenceMassArguments::new(" PEPTIDEK ", EnzymeKind::Trypsin, ModificationProfile::unmodified());
        let sequence_mass = calculate_sequence_mass(&arguments).unwrap();
        assert_eq!(sequence_mass.get_estimated_charge(), 2);
        assert_eq!(sequence_mass.get_mz_per_charge().len(), 2);
        let (charge, mz) = sequence_mass.get_mz_per_charge()[0];
        assert_eq!(charge, 2);
        assert!((mz - (sequence_mass.get_monoisotopic_mass() + 2.0 * mass::PROTON_MASS) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_heavy_acetylation_is_heavier() {
        let light = calculate_sequence_mass(&SequenceMassArguments::new("PEPTIDEK", EnzymeKind::ArgC, ModificationProfile::acetylated(IsotopeLabel::Light))).unwrap();
        let heavy = calculate_sequence_mass(&SequenceMassArguments::new("PEPTIDEK", EnzymeKind::ArgC, ModificationProfile::acetylated(IsotopeLabel::Heavy))).unwrap();
        assert!(heavy.get_monoisotopic_mass() > light.get_monoisotopic_mass());
        assert_eq!(light.get_estimated_charge(), 1);
    }

    #[test]
    fn test_invalid_sequence() {
        let arguments = SequenceMassArguments::new("PEPTIDEX", EnzymeKind::Trypsin, ModificationProfile::unmodified());
        assert!(matches!(calculate_sequence_mass(&arguments), Err(TaskError::InvalidResidue(_))));
    }
}
