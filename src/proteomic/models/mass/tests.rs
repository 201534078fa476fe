use crate::proteomic::models::amino_acids::amino_acid::{AminoAcid, InvalidResidueError};
use crate::proteomic::models::amino_acids::modification::{IsotopeLabel, ModificationProfile, CARBAMIDOMETHYL_MONO_MASS, ACETYL_MONO_MASS};
use crate::proteomic::models::mass::{calculate_mono_mass, mass_to_mz, mz_to_mass, DEUTERIUM_MONO_MASS, HYDROGEN_MONO_MASS, WATER_MONO_MASS};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_water_is_added_once() {
    let mass = calculate_mono_mass("G", &ModificationProfile::unmodified()).unwrap();
    let expected = WATER_MONO_MASS + AminoAcid::get('G').unwrap().get_mono_mass();
    assert!((mass - expected).abs() < TOLERANCE);
}

#[test]
fn test_known_peptide_mass() {
    // PEPTIDE, monoisotopic 799.359964
    let mass = calculate_mono_mass("PEPTIDE", &ModificationProfile::unmodified()).unwrap();
    assert!((mass - 799.359964).abs() < 1e-5);
}

#[test]
fn test_mass_is_positive_and_grows_with_length() {
    let profiles = vec![
        ModificationProfile::unmodified(),
        ModificationProfile::alkylated(),
        ModificationProfile::acetylated(IsotopeLabel::Light),
        ModificationProfile::acetylated(IsotopeLabel::Heavy),
    ];
    let sequence = "MSLREKTISGAKWSAIATVCIIGLGLVQMTVLAR";
    for profile in profiles.iter() {
        let mut last_mass = 0.0;
        for length in 1..=sequence.len() {
            let mass = calculate_mono_mass(&sequence[..length], profile).unwrap();
            assert!(mass > 0.0);
            assert!(mass > last_mass, "mass did not grow at length {} with {}", length, profile);
            last_mass = mass;
        }
    }
}

#[test]
fn test_cysteine_alkylation() {
    let unmodified = calculate_mono_mass("CAC", &ModificationProfile::unmodified()).unwrap();
    let alkylated = calculate_mono_mass("CAC", &ModificationProfile::alkylated()).unwrap();
    assert!((alkylated - unmodified - 2.0 * CARBAMIDOMETHYL_MONO_MASS).abs() < TOLERANCE);
}

#[test]
fn test_light_acetylation_per_lysine() {
    let unmodified = calculate_mono_mass("AKAKAK", &ModificationProfile::unmodified()).unwrap();
    let light = calculate_mono_mass("AKAKAK", &ModificationProfile::acetylated(IsotopeLabel::Light)).unwrap();
    assert!((light - unmodified - 3.0 * ACETYL_MONO_MASS).abs() < TOLERANCE);
}

#[test]
fn test_heavy_light_difference() {
    for sequence in ["LLSVVGIINFPALLGK", "KKEISHLELTTLYWK", "ARVDISFKFNVFK", "TLLFGYFGR"].iter() {
        let light = calculate_mono_mass(sequence, &ModificationProfile::acetylated(IsotopeLabel::Light)).unwrap();
        let heavy = calculate_mono_mass(sequence, &ModificationProfile::acetylated(IsotopeLabel::Heavy)).unwrap();
        let lysine_count = sequence.matches('K').count() as f64;
        let expected = lysine_count * (3.0 * (DEUTERIUM_MONO_MASS - HYDROGEN_MONO_MASS));
        assert!((heavy - light - expected).abs() < TOLERANCE, "{}: {} != {}", sequence, heavy - light, expected);
    }
}

#[test]
fn test_invalid_residue() {
    let result = calculate_mono_mass("PEPXIDE", &ModificationProfile::unmodified());
    assert_eq!(result, Err(InvalidResidueError::new('X', 3)));
}

#[test]
fn test_mz_conversion() {
    let mz = mass_to_mz(1000.0, 2);
    assert!((mz - 501.007276466).abs() < 1e-6);
    assert!((mz_to_mass(mz, 2) - 1000.0).abs() < TOLERANCE);
}
