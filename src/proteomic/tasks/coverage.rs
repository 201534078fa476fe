use tracing::info;

use crate::proteomic::models::coverage::CoverageBucket;
use crate::proteomic::tasks::{self, TaskError};
use crate::proteomic::utility::coverage_aggregator;
use crate::proteomic::utility::coverage_table;
use crate::proteomic::utility::precursor_table;
use crate::proteomic::utility::spectral_library;
use crate::proteomic::utility::window_table;

/// Where the precursor m/z values come from.
#[derive(Debug, Clone, PartialEq)]
pub enum MzSource {
    /// table written by the precursors task
    PrecursorTable(String),
    /// spectral library, only lysine acetylated precursors unless `all_entries` is set
    SpectralLibrary { path: String, all_entries: bool }
}

pub struct CoverageArguments {
    window_file: String,
    mz_source: MzSource,
    output_file: String
}

impl CoverageArguments {
    pub fn new(window_file: &str, mz_source: MzSource, output_file: &str) -> Self {
        return Self {
            window_file: window_file.to_owned(),
            mz_source: mz_source,
            output_file: output_file.to_owned()
        }
    }

    pub fn get_window_file(&self) -> &str {
        return self.window_file.as_str();
    }

    pub fn get_mz_source(&self) -> &MzSource {
        return &self.mz_source;
    }

    pub fn get_output_file(&self) -> &str {
        return self.output_file.as_str();
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self, TaskError> {
        let window_file = tasks::get_required_argument(cli_args, "WINDOW_FILE", "window file")?;
        let output_file = tasks::get_required_argument(cli_args, "OUTPUT_FILE", "output file")?;
        let mz_source = match (cli_args.value_of("PRECURSOR_FILE"), cli_args.value_of("SPECTRAL_LIBRARY")) {
            (Some(precursor_file), None) => MzSource::PrecursorTable(precursor_file.to_owned()),
            (None, Some(library_file)) => MzSource::SpectralLibrary { path: library_file.to_owned(), all_entries: cli_args.is_present("ALL_ENTRIES") },
            _ => return Err(TaskError::Argument("specify either a precursor file or a spectral library".to_owned()))
        };
        return Ok(Self::new(window_file, mz_source, output_file));
    }
}

pub fn read_mz_values(mz_source: &MzSource) -> Result<Vec<f64>, TaskError> {
    return match mz_source {
        MzSource::PrecursorTable(path) => Ok(precursor_table::read_mz_values(path)?),
        MzSource::SpectralLibrary { path, all_entries } => {
            let entries = spectral_library::read_spectral_library(path)?;
            Ok(entries.iter()
                .filter(|entry| *all_entries || entry.is_lysine_acetylated())
                .map(|entry| entry.get_precursor_mz())
                .collect())
        }
    };
}

/// Windows and m/z values in, one coverage row per window out.
pub fn coverage_task(coverage_arguments: &CoverageArguments) -> Result<Vec<CoverageBucket>, TaskError> {
    let start_time: f64 = time::precise_time_s();
    let windows = window_table::read_windows(coverage_arguments.get_window_file())?;
    let mz_values = read_mz_values(coverage_arguments.get_mz_source())?;
    info!("{} windows, {} precursor m/z values", windows.len(), mz_values.len());
    let buckets = coverage_aggregator::aggregate(&mz_values, &windows)?;
    coverage_table::write_buckets_to_file(coverage_arguments.get_output_file(), &buckets)?;
    let stop_time: f64 = time::precise_time_s();
    info!("coverage written to {} in {:.2} s", coverage_arguments.get_output_file(), stop_time - start_time);
    return Ok(buckets);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_from_precursor_table() {
        let temp_dir = tempfile::tempdir().unwrap();
        let window_file = temp_dir.path().join("windows.csv");
        let precursor_file = temp_dir.path().join("precursors.csv");
        let output_file = temp_dir.path().join("coverage.csv");
        std::fs::write(&window_file, "start_mz,stop_mz\n200,800\n800,1000\n").unwrap();
        std::fs::write(&precursor_file, "peptide,mz\nA,150\nB,300\nC,500\nD,900\n").unwrap();
        let arguments = CoverageArguments::new(
            window_file.to_str().unwrap(),
            MzSource::PrecursorTable(precursor_file.to_str().unwrap().to_owned()),
            output_file.to_str().unwrap()
        );
        let buckets = coverage_task(&arguments).unwrap();
        assert_eq!(buckets[0].get_fraction(), 0.5);
        assert_eq!(buckets[1].get_fraction(), 0.25);
        assert!(std::fs::read_to_string(&output_file).unwrap().contains("200,800,2,4,0.5"));
    }

    #[test]
    fn test_spectral_library_source() {
        let temp_dir = tempfile::tempdir().unwrap();
        let library_file = temp_dir.path().join("library.tsv");
        std::fs::write(
            &library_file,
            "PrecursorCharge\tPrecursorMz\tStrippedPeptide\tModifiedPeptide\tLabeledPeptide\tProteinGroups\n\
            2\t450.5\tAAKAAAR\t_AAK[Acetyl (K)]AAAR_\t_AAK[Acetyl (K)]AAAR_\tP1\n\
            2\t450.5\tAAKAAAR\t_AAK[Acetyl (K)]AAAR_\t_AAK[Acetyl (K)]AAAR_\tP1\n\
            2\t520.2\tLLLLLLR\t_LLLLLLR_\t_LLLLLLR_\tP2\n"
        ).unwrap();
        let path = library_file.to_str().unwrap().to_owned();
        assert_eq!(read_mz_values(&MzSource::SpectralLibrary { path: path.clone(), all_entries: false }).unwrap(), vec![450.5]);
        assert_eq!(read_mz_values(&MzSource::SpectralLibrary { path: path, all_entries: true }).unwrap(), vec![450.5, 520.2]);
    }
}
