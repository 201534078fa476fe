use crate::proteomic::models::amino_acids::amino_acid::{AminoAcid, InvalidResidueError};

const STANDARD_ONE_LETTER_CODES: &str = "ARNDCEQGHILKMFPSTWYV";

#[test]
fn test_standard_amino_acids() {
    for one_letter_code in STANDARD_ONE_LETTER_CODES.chars() {
        let amino_acid = match AminoAcid::get(one_letter_code) {
            Some(amino_acid) => amino_acid,
            None => panic!("{} is a standard amino acid", one_letter_code)
        };
        assert_eq!(amino_acid.get_one_letter_code(), one_letter_code);
        assert!(amino_acid.get_mono_mass() > 0.0);
        assert_eq!(amino_acid.get_three_letter_code().len(), 3);
    }
}

#[test]
fn test_non_standard_codes_are_unknown() {
    for one_letter_code in "BJOUXZ*-k ".chars() {
        assert!(AminoAcid::get(one_letter_code).is_none(), "{} is not a standard amino acid", one_letter_code);
    }
}

#[test]
fn test_validate_sequence() {
    assert_eq!(AminoAcid::validate_sequence(STANDARD_ONE_LETTER_CODES), Ok(()));
    assert_eq!(AminoAcid::validate_sequence(""), Ok(()));
    let error = AminoAcid::validate_sequence("MKUB").unwrap_err();
    assert_eq!(error, InvalidResidueError::new('U', 2));
    assert_eq!(error.to_string(), "invalid residue 'U' at position 2");
}

#[test]
fn test_isobaric_leucine_and_isoleucine() {
    let leucine = AminoAcid::get('L').unwrap();
    let isoleucine = AminoAcid::get('I').unwrap();
    assert_eq!(leucine.get_mono_mass(), isoleucine.get_mono_mass());
    assert_eq!(leucine.get_chemical_formula(), isoleucine.get_chemical_formula());
    assert_ne!(leucine.get_name(), isoleucine.get_name());
}
