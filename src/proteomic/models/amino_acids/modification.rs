use std::fmt;

use thiserror::Error;

use crate::proteomic::models::mass::{DEUTERIUM_MONO_MASS, HYDROGEN_MONO_MASS};

/// Iodoacetamide adduct, C2H3NO
pub const CARBAMIDOMETHYL_MONO_MASS: f64 = 57.021464;
/// Acetyl, C2H2O
pub const ACETYL_MONO_MASS: f64 = 42.010565;
/// Number of hydrogens exchanged against deuterium in the heavy acetyl label (acetyl-d3).
const HEAVY_ACETYL_LABELED_HYDROGENS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModificationError {
    #[error("fixed modification {0} is given more than once")]
    DuplicateFixedModification(FixedModification),
    #[error("only one variable modification per profile is supported, got {0} and {1}")]
    ConflictingVariableModifications(VariableModification, VariableModification),
    #[error("unknown isotope label '{0}', expected 'light' or 'heavy'")]
    UnknownIsotopeLabel(String)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsotopeLabel {
    Light,
    Heavy
}

impl IsotopeLabel {
    pub fn from_name(name: &str) -> Result<Self, ModificationError> {
        match name.trim().to_lowercase().as_str() {
            "light" => Ok(IsotopeLabel::Light),
            "heavy" => Ok(IsotopeLabel::Heavy),
            _ => Err(ModificationError::UnknownIsotopeLabel(name.to_owned()))
        }
    }

    pub fn get_name(&self) -> &'static str {
        return match self {
            IsotopeLabel::Light => "light",
            IsotopeLabel::Heavy => "heavy"
        }
    }
}

/// Modifications applied to every occurrence of their target residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedModification {
    /// Cysteine alkylation
    Carbamidomethyl
}

impl FixedModification {
    pub fn get_name(&self) -> &'static str {
        return match self {
            FixedModification::Carbamidomethyl => "Carbamidomethyl"
        }
    }

    pub fn get_target(&self) -> char {
        return match self {
            FixedModification::Carbamidomethyl => 'C'
        }
    }

    pub fn get_mono_mass(&self) -> f64 {
        return match self {
            FixedModification::Carbamidomethyl => CARBAMIDOMETHYL_MONO_MASS
        }
    }
}

impl fmt::Display for FixedModification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.get_name(), self.get_target())
    }
}

/// Modifications which are only present in some workflows, e.g. the acetyl-lysine proteome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableModification {
    Acetyl(IsotopeLabel)
}

impl VariableModification {
    pub fn get_name(&self) -> &'static str {
        return match self {
            VariableModification::Acetyl(_) => "Acetyl"
        }
    }

    pub fn get_target(&self) -> char {
        return match self {
            VariableModification::Acetyl(_) => 'K'
        }
    }

    /// The heavy acetyl delta is derived from the light one, so both channels
    /// always differ by exactly 3 × (D - H) per site.
    pub fn get_mono_mass(&self) -> f64 {
        return match self {
            VariableModification::Acetyl(IsotopeLabel::Light) => ACETYL_MONO_MASS,
            VariableModification::Acetyl(IsotopeLabel::Heavy) => {
                ACETYL_MONO_MASS - HEAVY_ACETYL_LABELED_HYDROGENS * HYDROGEN_MONO_MASS + HEAVY_ACETYL_LABELED_HYDROGENS * DEUTERIUM_MONO_MASS
            }
        }
    }

    pub fn get_isotope_label(&self) -> IsotopeLabel {
        return match self {
            VariableModification::Acetyl(label) => *label
        }
    }
}

impl fmt::Display for VariableModification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}({})", self.get_name(), self.get_isotope_label().get_name(), self.get_target())
    }
}

/// Which mass deltas are added to a peptide.
#[derive(Debug, Clone, PartialEq)]
pub struct ModificationProfile {
    fixed: Vec<FixedModification>,
    variable: Option<VariableModification>
}

impl ModificationProfile {
    pub fn unmodified() -> Self {
        return Self {
            fixed: Vec::new(),
            variable: None
        }
    }

    pub fn alkylated() -> Self {
        return Self {
            fixed: vec![FixedModification::Carbamidomethyl],
            variable: None
        }
    }

    pub fn acetylated(label: IsotopeLabel) -> Self {
        return Self {
            fixed: Vec::new(),
            variable: Some(VariableModification::Acetyl(label))
        }
    }

    pub fn builder() -> ModificationProfileBuilder {
        return ModificationProfileBuilder::new();
    }

    pub fn get_fixed_modifications(&self) -> &[FixedModification] {
        return &self.fixed;
    }

    pub fn get_variable_modification(&self) -> Option<VariableModification> {
        return self.variable;
    }

    pub fn is_unmodified(&self) -> bool {
        return self.fixed.is_empty() && self.variable.is_none();
    }

    /// Sum of all deltas which target the given residue.
    pub fn get_mass_delta(&self, one_letter_code: char) -> f64 {
        let mut delta: f64 = self.fixed.iter()
            .filter(|modification| modification.get_target() == one_letter_code)
            .map(|modification| modification.get_mono_mass())
            .sum();
        if let Some(modification) = self.variable {
            if modification.get_target() == one_letter_code {
                delta += modification.get_mono_mass();
            }
        }
        return delta;
    }
}

impl Default for ModificationProfile {
    fn default() -> Self {
        return Self::unmodified();
    }
}

impl fmt::Display for ModificationProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_unmodified() {
            return write!(f, "unmodified");
        }
        let mut parts: Vec<String> = self.fixed.iter().map(|modification| modification.to_string()).collect();
        if let Some(modification) = self.variable {
            parts.push(modification.to_string());
        }
        write!(f, "{}", parts.join(";"))
    }
}

#[derive(Debug, Default)]
pub struct ModificationProfileBuilder {
    fixed: Vec<FixedModification>,
    variable: Vec<VariableModification>
}

impl ModificationProfileBuilder {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn fixed(mut self, modification: FixedModification) -> Self {
        self.fixed.push(modification);
        return self;
    }

    pub fn variable(mut self, modification: VariableModification) -> Self {
        self.variable.push(modification);
        return self;
    }

    pub fn build(self) -> Result<ModificationProfile, ModificationError> {
        for (idx, modification) in self.fixed.iter().enumerate() {
            if self.fixed[..idx].contains(modification) {
                return Err(ModificationError::DuplicateFixedModification(*modification));
            }
        }
        if self.variable.len() > 1 {
            return Err(ModificationError::ConflictingVariableModifications(self.variable[0], self.variable[1]));
        }
        return Ok(ModificationProfile {
            fixed: self.fixed,
            variable: self.variable.first().copied()
        });
    }
}
