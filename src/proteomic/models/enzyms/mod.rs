pub mod digest_enzym;
pub mod trypsin;
pub mod arg_c;
pub mod peptide_filter;

use std::fmt;

use thiserror::Error;

use self::arg_c::ArgC;
use self::digest_enzym::DigestEnzym;
use self::trypsin::Trypsin;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown enzyme '{0}', expected one of: trypsin, arg-c")]
pub struct UnknownEnzymeError(String);

#[derive(Debug, Error)]
#[error("could not compile the cleavage rule of {enzym}")]
pub struct EnzymeError {
    enzym: EnzymeKind,
    #[source]
    source: onig::Error
}

impl EnzymeError {
    pub fn new(enzym: EnzymeKind, source: onig::Error) -> Self {
        return Self {
            enzym: enzym,
            source: source
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnzymeKind {
    Trypsin,
    ArgC
}

impl EnzymeKind {
    /// Case insensitive, dashes and underscores are ignored, so `Arg-C`, `arg_c` and `argc` are the same.
    pub fn from_name(enzym_name: &str) -> Result<Self, UnknownEnzymeError> {
        let normalized_name: String = enzym_name.trim().to_lowercase().chars().filter(|c| *c != '-' && *c != '_').collect();
        match normalized_name.as_str() {
            "trypsin" => Ok(EnzymeKind::Trypsin),
            "argc" => Ok(EnzymeKind::ArgC),
            _ => Err(UnknownEnzymeError(enzym_name.to_owned()))
        }
    }

    pub fn get_name(&self) -> &'static str {
        return match self {
            EnzymeKind::Trypsin => "Trypsin",
            EnzymeKind::ArgC => "Arg-C"
        }
    }
}

impl fmt::Display for EnzymeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.get_name())
    }
}

pub fn get(enzym_kind: EnzymeKind, max_number_of_missed_cleavages: u8, respect_proline_rule: bool) -> Result<Box<dyn DigestEnzym>, EnzymeError> {
    match enzym_kind {
        EnzymeKind::Trypsin => Ok(Box::new(Trypsin::new(max_number_of_missed_cleavages, respect_proline_rule)?)),
        EnzymeKind::ArgC => Ok(Box::new(ArgC::new(max_number_of_missed_cleavages, respect_proline_rule)?))
    }
}
