use thiserror::Error;

// (name, one letter code, three letter code, chemical formula, mono mass)
type AminoAcidTupel = (&'static str, char, &'static str, &'static str, f64);

const A: AminoAcidTupel = ("Alanine", 'A', "Ala", "C3H5ON", 71.037114);
const R: AminoAcidTupel = ("Arginine", 'R', "Arg", "C6H12ON4", 156.101111);
const N: AminoAcidTupel = ("Asparagine", 'N', "Asn", "C4H6O2N2", 114.042927);
const D: AminoAcidTupel = ("Aspartic acid", 'D', "Asp", "C4H5O3N", 115.026943);
const C: AminoAcidTupel = ("Cysteine", 'C', "Cys", "C3H5ONS", 103.009185);
const E: AminoAcidTupel = ("Glutamic acid", 'E', "Glu", "C5H7O3N", 129.042593);
const Q: AminoAcidTupel = ("Glutamine", 'Q', "Gln", "C5H8O2N2", 128.058578);
const G: AminoAcidTupel = ("Glycine", 'G', "Gly", "C2H3ON", 57.021464);
const H: AminoAcidTupel = ("Histidine", 'H', "His", "C6H7ON3", 137.058912);
const I: AminoAcidTupel = ("Isoleucine", 'I', "Ile", "C6H11ON", 113.084064);
const L: AminoAcidTupel = ("Leucine", 'L', "Leu", "C6H11ON", 113.084064);
const K: AminoAcidTupel = ("Lysine", 'K', "Lys", "C6H12ON2", 128.094963);
const M: AminoAcidTupel = ("Methionine", 'M', "Met", "C5H9ONS", 131.040485);
const F: AminoAcidTupel = ("Phenylalanine", 'F', "Phe", "C9H9ON", 147.068414);
const P: AminoAcidTupel = ("Proline", 'P', "Pro", "C5H7ON", 97.052764);
const S: AminoAcidTupel = ("Serine", 'S', "Ser", "C3H5O2N", 87.032028);
const T: AminoAcidTupel = ("Threonine", 'T', "Thr", "C4H7O2N", 101.047679);
const W: AminoAcidTupel = ("Tryptophan", 'W', "Trp", "C11H10ON2", 186.079313);
const Y: AminoAcidTupel = ("Tyrosine", 'Y', "Tyr", "C9H9O2N", 163.063329);
const V: AminoAcidTupel = ("Valine", 'V', "Val", "C5H9ON", 99.068414);

/// Raised when a sequence contains anything but the 20 standard one letter codes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid residue '{residue}' at position {position}")]
pub struct InvalidResidueError {
    residue: char,
    position: usize
}

impl InvalidResidueError {
    pub fn new(residue: char, position: usize) -> Self {
        return Self {
            residue: residue,
            position: position
        }
    }

    pub fn get_residue(&self) -> char {
        return self.residue;
    }

    /// zero based
    pub fn get_position(&self) -> usize {
        return self.position;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AminoAcid {
    name: &'static str,
    one_letter_code: char,
    three_letter_code: &'static str,
    chemical_formula: &'static str,
    mono_mass: f64
}

impl AminoAcid {
    fn new(amino_acid_tupel: AminoAcidTupel) -> AminoAcid {
        return AminoAcid {
            name: amino_acid_tupel.0,
            one_letter_code: amino_acid_tupel.1,
            three_letter_code: amino_acid_tupel.2,
            chemical_formula: amino_acid_tupel.3,
            mono_mass: amino_acid_tupel.4
        }
    }

    pub fn get_name(&self) -> &'static str {
        return self.name;
    }

    pub fn get_one_letter_code(&self) -> char {
        return self.one_letter_code;
    }

    pub fn get_three_letter_code(&self) -> &'static str {
        return self.three_letter_code;
    }

    pub fn get_chemical_formula(&self) -> &'static str {
        return self.chemical_formula;
    }

    /// Residue mass, i.e. without the water of the free termini.
    pub fn get_mono_mass(&self) -> f64 {
        return self.mono_mass;
    }

    /// Returns `None` for everything outside the 20 standard amino acids,
    /// ambiguity codes (B, J, Z, X) and the rare ones (O, U) included.
    pub fn get(one_letter_code: char) -> Option<AminoAcid> {
        let amino_acid_tupel = match one_letter_code {
            'A' => A,
            'R' => R,
            'N' => N,
            'D' => D,
            'C' => C,
            'E' => E,
            'Q' => Q,
            'G' => G,
            'H' => H,
            'I' => I,
            'L' => L,
            'K' => K,
            'M' => M,
            'F' => F,
            'P' => P,
            'S' => S,
            'T' => T,
            'W' => W,
            'Y' => Y,
            'V' => V,
            _ => return None
        };
        return Some(AminoAcid::new(amino_acid_tupel));
    }

    pub fn is_standard(one_letter_code: char) -> bool {
        return AminoAcid::get(one_letter_code).is_some();
    }

    /// Checks every residue, reports the first one which is not a standard amino acid.
    pub fn validate_sequence(sequence: &str) -> Result<(), InvalidResidueError> {
        match sequence.chars().enumerate().find(|(_, one_letter_code)| !AminoAcid::is_standard(*one_letter_code)) {
            Some((position, residue)) => Err(InvalidResidueError::new(residue, position)),
            None => Ok(())
        }
    }
}
