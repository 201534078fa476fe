use crate::proteomic::models::amino_acids::modification::ModificationProfile;
use crate::proteomic::models::mass::PROTON_MASS;
use crate::proteomic::models::peptide::Peptide;
use crate::proteomic::models::precursor::{PrecursorObservation, RETAINED_CHARGES};

#[test]
fn test_mz_is_derived_from_mass_and_charge() {
    for charge in RETAINED_CHARGES.iter() {
        let observation = PrecursorObservation::new(Peptide::new("LNPIITR", "P1", 0), ModificationProfile::unmodified(), 1000.0, *charge).unwrap();
        let expected = (1000.0 + *charge as f64 * PROTON_MASS) / *charge as f64;
        assert!((observation.get_mz() - expected).abs() < 1e-9);
        assert_eq!(observation.get_charge(), *charge);
        assert_eq!(observation.get_monoisotopic_mass(), 1000.0);
        assert_eq!(observation.get_peptide().get_sequence(), "LNPIITR");
        assert!(observation.get_modification_profile().is_unmodified());
    }
}

#[test]
fn test_only_retained_charges_are_accepted() {
    for charge in [0u8, 1u8, 4u8, 7u8].iter() {
        let result = PrecursorObservation::new(Peptide::new("LNPIITR", "P1", 0), ModificationProfile::unmodified(), 1000.0, *charge);
        match result {
            Err(err) => assert_eq!(err.get_charge(), *charge),
            Ok(observation) => panic!("charge {} accepted, mz {}", charge, observation.get_mz())
        }
    }
}
