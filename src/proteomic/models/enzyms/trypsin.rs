use crate::proteomic::models::enzyms::digest_enzym::DigestEnzym;
use crate::proteomic::models::enzyms::{EnzymeError, EnzymeKind};

// cleaves after K or R, but not in front of P
const DIGEST_PATTERN: &str = r"(?<=[KR])(?!P)";
const DIGEST_PATTERN_WITHOUT_PROLINE_RULE: &str = r"(?<=[KR])";

pub struct Trypsin {
    digest_regex: onig::Regex,
    max_number_of_missed_cleavages: u8,
    respect_proline_rule: bool
}

impl Trypsin {
    pub fn new(max_number_of_missed_cleavages: u8, respect_proline_rule: bool) -> Result<Self, EnzymeError> {
        let pattern = if respect_proline_rule { DIGEST_PATTERN } else { DIGEST_PATTERN_WITHOUT_PROLINE_RULE };
        let digest_regex = match onig::Regex::new(pattern) {
            Ok(regex) => regex,
            Err(err) => return Err(EnzymeError::new(EnzymeKind::Trypsin, err))
        };
        return Ok(Self {
            digest_regex: digest_regex,
            max_number_of_missed_cleavages: max_number_of_missed_cleavages,
            respect_proline_rule: respect_proline_rule
        });
    }
}

impl DigestEnzym for Trypsin {
    fn get_kind(&self) -> EnzymeKind {
        return EnzymeKind::Trypsin;
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
