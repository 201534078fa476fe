use crate::proteomic::models::enzyms::digest_enzym::DigestEnzym;
use crate::proteomic::models::enzyms::{EnzymeError, EnzymeKind};

// cleaves after R only, but not in front of P
const DIGEST_PATTERN: &str = r"(?<=R)(?!P)";
const DIGEST_PATTERN_WITHOUT_PROLINE_RULE: &str = r"(?<=R)";

/// Arg-C, also what trypsin effectively becomes on a proteome with fully acetylated lysines.
pub struct ArgC {
    digest_regex: onig::Regex,
    max_number_of_missed_cleavages: u8,
    respect_proline_rule: bool
}

impl ArgC {
    pub fn new(max_number_of_missed_cleavages: u8, respect_proline_rule: bool) -> Result<Self, EnzymeError> {
        let pattern = if respect_proline_rule { DIGEST_PATTERN } else { DIGEST_PATTERN_WITHOUT_PROLINE_RULE };
        let digest_regex = match onig::Regex::new(pattern) {
            Ok(regex) => regex,
            Err(err) => return Err(EnzymeError::new(EnzymeKind::ArgC, err))
        };
        return Ok(Self {
            digest_regex: digest_regex,
            max_number_of_missed_cleavages: max_number_of_missed_cleavages,
            respect_proline_rule: respect_proline_rule
        });
    }
}

impl DigestEnzym for ArgC {
    fn get_kind(&self) -> EnzymeKind {
        return EnzymeKind::ArgC;
    }

    fn get_max_number_of_missed_cleavages(&self) -> u8 {
        return self.max_number_of_missed_cleavages;
    }

    fn respects_proline_rule(&self) -> bool {
        return self.respect_proline_rule;
    }

    fn get_digest_regex(&self) -> &onig::Regex {
        return &self.digest_regex;
    }
}
