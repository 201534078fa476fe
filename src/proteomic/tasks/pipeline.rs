use std::fmt;
use std::sync::mpsc;

use thiserror::Error;
use threadpool::ThreadPool;
use tracing::{debug, warn};

use crate::proteomic::models::amino_acids::amino_acid::InvalidResidueError;
use crate::proteomic::models::amino_acids::modification::ModificationProfile;
use crate::proteomic::models::enzyms::{self, EnzymeError, EnzymeKind};
use crate::proteomic::models::enzyms::digest_enzym::DigestEnzym;
use crate::proteomic::models::enzyms::peptide_filter::PeptideFilter;
use crate::proteomic::models::mass;
use crate::proteomic::models::precursor::PrecursorObservation;
use crate::proteomic::models::protein::ProteinRecord;
use crate::proteomic::utility::precursor_estimator::{self, BasicResidues, ChargeMode};

/// Number of proteins handed to a worker at once. Each worker compiles its own enzyme regex,
/// so a job should be large enough to amortize that.
pub const BATCH_SIZE: usize = 256;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Enzyme(#[from] EnzymeError),
    #[error("only {received} of {expected} protein batches were processed, a worker thread panicked")]
    WorkerFailed { expected: usize, received: usize }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineParameters {
    enzym_kind: EnzymeKind,
    max_number_of_missed_cleavages: u8,
    respect_proline_rule: bool,
    peptide_filter: PeptideFilter,
    modification_profile: ModificationProfile,
    charge_mode: ChargeMode
}

impl PipelineParameters {
    pub fn new(enzym_kind: EnzymeKind, max_number_of_missed_cleavages: u8, respect_proline_rule: bool, peptide_filter: PeptideFilter, modification_profile: ModificationProfile, charge_mode: ChargeMode) -> Self {
        return Self {
            enzym_kind: enzym_kind,
            max_number_of_missed_cleavages: max_number_of_missed_cleavages,
            respect_proline_rule: respect_proline_rule,
            peptide_filter: peptide_filter,
            modification_profile: modification_profile,
            charge_mode: charge_mode
        }
    }

    pub fn get_enzym_kind(&self) -> EnzymeKind {
        return self.enzym_kind;
    }

    pub fn get_max_number_of_missed_cleavages(&self) -> u8 {
        return self.max_number_of_missed_cleavages;
    }

    pub fn respects_proline_rule(&self) -> bool {
        return self.respect_proline_rule;
    }

    pub fn get_peptide_filter(&self) -> &PeptideFilter {
        return &self.peptide_filter;
    }

    pub fn get_modification_profile(&self) -> &ModificationProfile {
        return &self.modification_profile;
    }

    pub fn get_charge_mode(&self) -> ChargeMode {
        return self.charge_mode;
    }
}

impl Default for PipelineParameters {
    /// Trypsin without missed cleavages, proline rule respected, unmodified, estimated charge.
    fn default() -> Self {
        return Self::new(EnzymeKind::Trypsin, 0, true, PeptideFilter::default(), ModificationProfile::unmodified(), ChargeMode::Estimated);
    }
}

/// A protein dropped from the result because its sequence could not be digested.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedProtein {
    protein: ProteinRecord,
    error: InvalidResidueError
}

impl RejectedProtein {
    pub fn get_protein(&self) -> &ProteinRecord {
        return &self.protein;
    }

    pub fn get_error(&self) -> &InvalidResidueError {
        return &self.error;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    number_of_processed_proteins: usize,
    number_of_rejected_proteins: usize,
    number_of_peptides: usize,
    number_of_observations: usize
}

impl PipelineSummary {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn get_number_of_processed_proteins(&self) -> usize {
        return self.number_of_processed_proteins;
    }

    pub fn get_number_of_rejected_proteins(&self) -> usize {
        return self.number_of_rejected_proteins;
    }

    /// Peptides which passed the filter.
    pub fn get_number_of_peptides(&self) -> usize {
        return self.number_of_peptides;
    }

    pub fn get_number_of_observations(&self) -> usize {
        return self.number_of_observations;
    }

    pub fn increase_protein_counter(&mut self, was_rejected: bool) {
        if was_rejected { self.number_of_rejected_proteins += 1; }
        self.number_of_processed_proteins += 1;
    }

    pub fn increase_peptide_counter_by(&mut self, number_of_peptides: usize) {
        self.number_of_peptides += number_of_peptides;
    }

    pub fn increase_observation_counter_by(&mut self, number_of_observations: usize) {
        self.number_of_observations += number_of_observations;
    }

    pub fn merge(&mut self, other: &PipelineSummary) {
        self.number_of_processed_proteins += other.number_of_processed_proteins;
        self.number_of_rejected_proteins += other.number_of_rejected_proteins;
        self.number_of_peptides += other.number_of_peptides;
        self.number_of_observations += other.number_of_observations;
    }
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} proteins processed, {} rejected, {} peptides, {} precursor observations",
            self.number_of_processed_proteins,
            self.number_of_rejected_proteins,
            self.number_of_peptides,
            self.number_of_observations
        )
    }
}

#[derive(Debug, Default)]
pub struct PipelineResult {
    observations: Vec<PrecursorObservation>,
    rejected: Vec<RejectedProtein>,
    summary: PipelineSummary
}

impl PipelineResult {
    /// Observations in input order of their proteins.
    pub fn get_observations(&self) -> &[PrecursorObservation] {
        return &self.observations;
    }

    pub fn get_rejected(&self) -> &[RejectedProtein] {
        return &self.rejected;
    }

    pub fn get_summary(&self) -> &PipelineSummary {
        return &self.summary;
    }

    pub fn get_mz_values(&self) -> Vec<f64> {
        return self.observations.iter().map(|observation| observation.get_mz()).collect();
    }

    pub fn into_observations(self) -> Vec<PrecursorObservation> {
        return self.observations;
    }

    fn append(&mut self, mut other: PipelineResult) {
        self.observations.append(&mut other.observations);
        self.rejected.append(&mut other.rejected);
        self.summary.merge(&other.summary);
    }
}

/// Digest, filter, mass and charge for single proteins.
pub struct PrecursorPipeline {
    enzym: Box<dyn DigestEnzym>,
    basic_residues: BasicResidues,
    parameters: PipelineParameters
}

impl PrecursorPipeline {
    pub fn new(parameters: PipelineParameters) -> Result<Self, EnzymeError> {
        let enzym = enzyms::get(parameters.get_enzym_kind(), parameters.get_max_number_of_missed_cleavages(), parameters.respects_proline_rule())?;
        return Ok(Self {
            enzym: enzym,
            basic_residues: BasicResidues::for_enzyme(parameters.get_enzym_kind()),
            parameters: parameters
        });
    }

    pub fn get_parameters(&self) -> &PipelineParameters {
        return &self.parameters;
    }

    /// An empty result is fine, e.g. if the protein is shorter than the minimum peptide length.
    pub fn process_protein(&self, protein: &ProteinRecord) -> Result<Vec<PrecursorObservation>, InvalidResidueError> {
        return self.process_protein_counting_peptides(protein).map(|(_, observations)| observations);
    }

    fn process_protein_counting_peptides(&self, protein: &ProteinRecord) -> Result<(usize, Vec<PrecursorObservation>), InvalidResidueError> {
        let peptides = self.parameters.get_peptide_filter().apply(self.enzym.digest(protein)?);
        let mut observations: Vec<PrecursorObservation> = Vec::new();
        for peptide in peptides.iter() {
            let monoisotopic_mass = mass::calculate_mono_mass(peptide.get_sequence(), self.parameters.get_modification_profile())?;
            observations.append(&mut precursor_estimator::estimate_precursors(
                peptide,
                self.parameters.get_modification_profile(),
                monoisotopic_mass,
                self.basic_residues,
                self.parameters.get_charge_mode()
            ));
        }
        return Ok((peptides.len(), observations));
    }

    /// Processes proteins in order. Proteins with invalid residues are logged and moved to the rejected list.
    pub fn process_proteins(&self, proteins: Vec<ProteinRecord>) -> PipelineResult {
        let mut result = PipelineResult::default();
        for protein in proteins.into_iter() {
            match self.process_protein_counting_peptides(&protein) {
                Ok((number_of_peptides, mut observations)) => {
                    result.summary.increase_protein_counter(false);
                    result.summary.increase_peptide_counter_by(number_of_peptides);
                    result.summary.increase_observation_counter_by(observations.len());
                    result.observations.append(&mut observations);
                },
                Err(err) => {
                    warn!("dropping protein {}: {}", protein.get_accession(), err);
                    result.summary.increase_protein_counter(true);
                    result.rejected.push(RejectedProtein { protein: protein, error: err });
                }
            }
        }
        return result;
    }
}

/// Runs the pipeline over all proteins. With more than one thread the proteins are processed in batches
/// on a thread pool, the batches are put back into input order so the result equals a single threaded run.
pub fn run(proteins: Vec<ProteinRecord>, parameters: &PipelineParameters, thread_count: usize) -> Result<PipelineResult, PipelineError> {
    // fail early on enzyme errors instead of once per batch
    let pipeline = PrecursorPipeline::new(parameters.clone())?;
    if thread_count <= 1 || proteins.len() <= BATCH_SIZE {
        debug!("processing {} proteins in a single thread", proteins.len());
        return Ok(pipeline.process_proteins(proteins));
    }

    let mut batches: Vec<Vec<ProteinRecord>> = Vec::new();
    let mut proteins = proteins.into_iter().peekable();
    while proteins.peek().is_some() {
        batches.push(proteins.by_ref().take(BATCH_SIZE).collect());
    }
    let number_of_batches = batches.len();
    debug!("processing {} batches on {} threads", number_of_batches, thread_count);

    let thread_pool = ThreadPool::new(thread_count);
    let (sender, receiver) = mpsc::channel();
    for (batch_idx, batch) in batches.into_iter().enumerate() {
        let sender = sender.clone();
        let parameters = parameters.clone();
        thread_pool.execute(move || {
            let batch_result = PrecursorPipeline::new(parameters).map(|pipeline| pipeline.process_proteins(batch));
            // the receiver only hangs up after all batches arrived
            let _ = sender.send((batch_idx, batch_result));
        });
    }
    // the receiver's iterator ends when the last sender is gone
    drop(sender);
    let mut batch_results: Vec<(usize, Result<PipelineResult, EnzymeError>)> = receiver.iter().collect();
    thread_pool.join();
    if batch_results.len() != number_of_batches {
        return Err(PipelineError::WorkerFailed { expected: number_of_batches, received: batch_results.len() });
    }
    batch_results.sort_by_key(|(batch_idx, _)| *batch_idx);

    let mut result = PipelineResult::default();
    for (_, batch_result) in batch_results.into_iter() {
        result.append(batch_result?);
    }
    return Ok(result);
}
