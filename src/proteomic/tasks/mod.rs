pub mod pipeline;
pub mod precursors;
pub mod coverage;
pub mod sequence_mass;

use std::io;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::proteomic::models::amino_acids::amino_acid::InvalidResidueError;
use crate::proteomic::models::amino_acids::modification::{FixedModification, IsotopeLabel, ModificationError, ModificationProfile, VariableModification};
use crate::proteomic::models::coverage::WindowError;
use crate::proteomic::models::enzyms::{EnzymeKind, UnknownEnzymeError};
use crate::proteomic::utility::input_file_reader::fasta_reader::MalformedInputError;
use crate::proteomic::utility::precursor_estimator::UnknownChargeModeError;
use crate::proteomic::utility::TableError;
use crate::proteomic::tasks::pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Argument(String),
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),
    #[error(transparent)]
    InvalidResidue(#[from] InvalidResidueError),
    #[error(transparent)]
    UnknownEnzyme(#[from] UnknownEnzymeError),
    #[error(transparent)]
    UnknownChargeMode(#[from] UnknownChargeModeError),
    #[error(transparent)]
    Modification(#[from] ModificationError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error("could not write rejected proteins to {path}")]
    RejectedProteinLog {
        path: String,
        #[source]
        source: io::Error
    }
}

/// Value of a required argument.
pub fn get_required_argument<'a>(cli_args: &'a clap::ArgMatches, name: &str, description: &str) -> Result<&'a str, TaskError> {
    return match cli_args.value_of(name) {
        Some(value) => Ok(value),
        None => Err(TaskError::Argument(format!("no {} specified", description)))
    };
}

/// Parses an optional argument, falls back to `default` with a warning if it is missing.
pub fn parse_argument_or_default<T: FromStr + std::fmt::Display>(cli_args: &clap::ArgMatches, name: &str, description: &str, default: T) -> Result<T, TaskError> {
    return match cli_args.value_of(name) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed_value) => Ok(parsed_value),
            Err(_) => Err(TaskError::Argument(format!("could not parse {} '{}'", description, value)))
        },
        None => {
            warn!("{} not specified, set it to {}", description, default);
            Ok(default)
        }
    };
}

/// Parses an optional argument which stays unset if missing.
pub fn parse_optional_argument<T: FromStr>(cli_args: &clap::ArgMatches, name: &str, description: &str) -> Result<Option<T>, TaskError> {
    return match cli_args.value_of(name) {
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed_value) => Ok(Some(parsed_value)),
            Err(_) => Err(TaskError::Argument(format!("could not parse {} '{}'", description, value)))
        },
        None => Ok(None)
    };
}

pub fn get_enzym_kind(cli_args: &clap::ArgMatches) -> Result<EnzymeKind, TaskError> {
    return match cli_args.value_of("ENZYM_NAME") {
        Some(enzym_name) => Ok(EnzymeKind::from_name(enzym_name)?),
        None => {
            warn!("no enzyme specified, use {}", EnzymeKind::Trypsin);
            Ok(EnzymeKind::Trypsin)
        }
    };
}

/// Builds the modification profile from `--alkylation` and `--acetylation <light|heavy>`.
pub fn get_modification_profile(cli_args: &clap::ArgMatches) -> Result<ModificationProfile, TaskError> {
    let mut builder = ModificationProfile::builder();
    if cli_args.is_present("ALKYLATION") {
        builder = builder.fixed(FixedModification::Carbamidomethyl);
    }
    if let Some(label_name) = cli_args.value_of("ACETYLATION") {
        builder = builder.variable(VariableModification::Acetyl(IsotopeLabel::from_name(label_name)?));
    }
    return Ok(builder.build()?);
}
