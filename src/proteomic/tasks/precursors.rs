use tracing::{info, warn};

use crate::proteomic::models::amino_acids::modification::ModificationProfile;
use crate::proteomic::models::enzyms::EnzymeKind;
use crate::proteomic::models::enzyms::peptide_filter::{PeptideFilter, DEFAULT_MIN_PEPTIDE_LENGTH};
use crate::proteomic::tasks::{self, TaskError};
use crate::proteomic::tasks::pipeline::{self, PipelineParameters, PipelineSummary};
use crate::proteomic::utility::input_file_reader::fasta_reader::FastaReader;
use crate::proteomic::utility::logger::rejected_protein_logger::RejectedProteinLogger;
use crate::proteomic::utility::precursor_estimator::ChargeMode;
use crate::proteomic::utility::precursor_table;

pub struct PrecursorsArguments {
    input_file: String,
    output_file: String,
    rejected_proteins_file: Option<String>,
    thread_count: usize,
    enzym_kind: EnzymeKind,
    number_of_missed_cleavages: u8,
    min_peptide_length: usize,
    max_peptide_length: Option<usize>,
    require_lysine: bool,
    respect_proline_rule: bool,
    modification_profile: ModificationProfile,
    charge_mode: ChargeMode
}

impl PrecursorsArguments {
    pub fn get_input_file(&self) -> &str {
        return self.input_file.as_str();
    }

    pub fn get_output_file(&self) -> &str {
        return self.output_file.as_str();
    }

    pub fn get_rejected_proteins_file(&self) -> Option<&str> {
        return self.rejected_proteins_file.as_ref().map(|file| file.as_str());
    }

    pub fn get_thread_count(&self) -> usize {
        return self.thread_count;
    }

    pub fn get_pipeline_parameters(&self) -> PipelineParameters {
        let mut peptide_filter = PeptideFilter::new(self.min_peptide_length, self.max_peptide_length);
        if self.require_lysine {
            peptide_filter = peptide_filter.require_lysine();
        }
        return PipelineParameters::new(
            self.enzym_kind,
            self.number_of_missed_cleavages,
            self.respect_proline_rule,
            peptide_filter,
            self.modification_profile.clone(),
            self.charge_mode
        );
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self, TaskError> {
        let input_file = tasks::get_required_argument(cli_args, "INPUT_FILE", "input file")?;
        let output_file = tasks::get_required_argument(cli_args, "OUTPUT_FILE", "output file")?;
        let thread_count: usize = tasks::parse_argument_or_default(cli_args, "THREAD_COUNT", "thread count", num_cpus::get())?;
        if thread_count == 0 {
            return Err(TaskError::Argument("thread count must be at least 1".to_owned()));
        }
        let enzym_kind = tasks::get_enzym_kind(cli_args)?;
        let number_of_missed_cleavages: u8 = tasks::parse_argument_or_default(cli_args, "NUMBER_OF_MISSED_CLEAVAGES", "number of missed cleavages", 0)?;
        let min_peptide_length: usize = tasks::parse_argument_or_default(cli_args, "MIN_PEPTIDE_LENGTH", "min peptide length", DEFAULT_MIN_PEPTIDE_LENGTH)?;
        let max_peptide_length: Option<usize> = tasks::parse_optional_argument(cli_args, "MAX_PEPTIDE_LENGTH", "max peptide length")?;
        if let Some(max_peptide_length) = max_peptide_length {
            if min_peptide_length > max_peptide_length {
                return Err(TaskError::Argument("min peptide length must be less or equal than max peptide length".to_owned()));
            }
        }
        let charge_mode = match cli_args.value_of("CHARGE_MODE") {
            Some(mode_name) => ChargeMode::from_name(mode_name)?,
            None => ChargeMode::Estimated
        };
        let respect_proline_rule = !cli_args.is_present("IGNORE_PROLINE_RULE");
        if !respect_proline_rule {
            warn!("proline rule disabled, {} cleaves before proline", enzym_kind);
        }
        return Ok(Self {
            input_file: input_file.to_owned(),
            output_file: output_file.to_owned(),
            rejected_proteins_file: cli_args.value_of("REJECTED_PROTEINS_FILE").map(|file| file.to_owned()),
            thread_count: thread_count,
            enzym_kind: enzym_kind,
            number_of_missed_cleavages: number_of_missed_cleavages,
            min_peptide_length: min_peptide_length,
            max_peptide_length: max_peptide_length,
            require_lysine: cli_args.is_present("REQUIRE_LYSINE"),
            respect_proline_rule: respect_proline_rule,
            modification_profile: tasks::get_modification_profile(cli_args)?,
            charge_mode: charge_mode
        });
    }
}

/// FASTA in, precursor table out.
pub fn precursors_task(precursors_arguments: &PrecursorsArguments) -> Result<PipelineSummary, TaskError> {
    let start_time: f64 = time::precise_time_s();
    let proteins = FastaReader::read_all(precursors_arguments.get_input_file())?;
    info!("read {} proteins from {}", proteins.len(), precursors_arguments.get_input_file());

    let parameters = precursors_arguments.get_pipeline_parameters();
    info!(
        "digest with {}, {} missed cleavages, modifications: {}, charge mode: {}",
        parameters.get_enzym_kind(),
        parameters.get_max_number_of_missed_cleavages(),
        parameters.get_modification_profile(),
        parameters.get_charge_mode()
    );
    let result = pipeline::run(proteins, &parameters, precursors_arguments.get_thread_count())?;

    if let Some(rejected_proteins_file) = precursors_arguments.get_rejected_proteins_file() {
        let mut logger = match RejectedProteinLogger::new(rejected_proteins_file) {
            Ok(logger) => logger,
            Err(err) => return Err(TaskError::RejectedProteinLog { path: rejected_proteins_file.to_owned(), source: err })
        };
        for rejected_protein in result.get_rejected().iter() {
            if let Err(err) = logger.write(rejected_protein.get_protein()) {
                return Err(TaskError::RejectedProteinLog { path: rejected_proteins_file.to_owned(), source: err });
            }
        }
        if let Err(err) = logger.flush() {
            return Err(TaskError::RejectedProteinLog { path: rejected_proteins_file.to_owned(), source: err });
        }
    }

    precursor_table::write_observations_to_file(precursors_arguments.get_output_file(), result.get_observations())?;
    let stop_time: f64 = time::precise_time_s();
    info!("{} in {:.2} s", result.get_summary(), stop_time - start_time);
    return Ok(result.get_summary().clone());
}
