use std::error::Error;
use std::process;

use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use tracing::{debug, info};

use precursor_coverage::proteomic::tasks::TaskError;
use precursor_coverage::proteomic::tasks::coverage::{self, CoverageArguments};
use precursor_coverage::proteomic::tasks::precursors::{self, PrecursorsArguments};
use precursor_coverage::proteomic::tasks::sequence_mass::{self, SequenceMassArguments};
use precursor_coverage::proteomic::utility::logger;

fn enzym_arg<'a, 'b>() -> Arg<'a, 'b> {
    return Arg::with_name("ENZYM_NAME")
        .short("e")
        .long("enzyme")
        .takes_value(true)
        .env("PRECURSOR_ENZYME")
        .help("trypsin or arg-c (default: trypsin)");
}

fn alkylation_arg<'a, 'b>() -> Arg<'a, 'b> {
    return Arg::with_name("ALKYLATION")
        .long("alkylation")
        .help("carbamidomethylation of every cysteine");
}

fn acetylation_arg<'a, 'b>() -> Arg<'a, 'b> {
    return Arg::with_name("ACETYLATION")
        .long("acetylation")
        .takes_value(true)
        .possible_values(&["light", "heavy"])
        .help("acetylation of every lysine with the given isotope label");
}

fn build_cli<'a, 'b>() -> App<'a, 'b> {
    return App::new("precursor-coverage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Digests a protein database in silico and tabulates precursor m/z coverage of acquisition windows")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("VERBOSE").short("v").multiple(true).global(true).help("more log output, repeat for more"))
        .arg(Arg::with_name("QUIET").short("q").long("quiet").global(true).help("no log output"))
        .subcommand(SubCommand::with_name("precursors")
            .about("digests a FASTA file and writes the precursor observations as CSV")
            .arg(Arg::with_name("INPUT_FILE").short("i").long("input-file").takes_value(true).required(true).help("FASTA file"))
            .arg(Arg::with_name("OUTPUT_FILE").short("o").long("output-file").takes_value(true).required(true).help("precursor CSV"))
            .arg(enzym_arg())
            .arg(Arg::with_name("NUMBER_OF_MISSED_CLEAVAGES").short("m").long("missed-cleavages").takes_value(true).env("PRECURSOR_MISSED_CLEAVAGES"))
            .arg(Arg::with_name("MIN_PEPTIDE_LENGTH").short("l").long("min-length").takes_value(true).env("PRECURSOR_MIN_PEPTIDE_LENGTH"))
            .arg(Arg::with_name("MAX_PEPTIDE_LENGTH").short("L").long("max-length").takes_value(true).env("PRECURSOR_MAX_PEPTIDE_LENGTH"))
            .arg(alkylation_arg())
            .arg(acetylation_arg())
            .arg(Arg::with_name("REQUIRE_LYSINE").long("require-lysine").help("keep only peptides containing K"))
            .arg(Arg::with_name("CHARGE_MODE").long("charge-mode").takes_value(true).possible_values(&["estimated", "all"]))
            .arg(Arg::with_name("IGNORE_PROLINE_RULE").long("ignore-proline-rule").help("cleave before proline, too"))
            .arg(Arg::with_name("THREAD_COUNT").short("t").long("threads").takes_value(true).env("PRECURSOR_THREAD_COUNT"))
            .arg(Arg::with_name("REJECTED_PROTEINS_FILE").long("rejected-proteins").takes_value(true).help("FASTA file for proteins with invalid residues")))
        .subcommand(SubCommand::with_name("coverage")
            .about("fraction of precursor m/z values inside each acquisition window")
            .arg(Arg::with_name("WINDOW_FILE").short("w").long("windows").takes_value(true).required(true).help("CSV with start_mz and stop_mz"))
            .arg(Arg::with_name("PRECURSOR_FILE").short("p").long("precursors").takes_value(true).help("CSV written by the precursors command"))
            .arg(Arg::with_name("SPECTRAL_LIBRARY").short("s").long("spectral-library").takes_value(true).help("tab separated spectral library"))
            .arg(Arg::with_name("ALL_ENTRIES").long("all-entries").requires("SPECTRAL_LIBRARY").help("use all library precursors, not only acetylated ones"))
            .group(ArgGroup::with_name("MZ_SOURCE").args(&["PRECURSOR_FILE", "SPECTRAL_LIBRARY"]).required(true))
            .arg(Arg::with_name("OUTPUT_FILE").short("o").long("output-file").takes_value(true).required(true).help("coverage CSV")))
        .subcommand(SubCommand::with_name("sequence-mass")
            .about("prints mass, estimated charge and m/z of a single sequence")
            .arg(Arg::with_name("SEQUENCE").short("s").long("sequence").takes_value(true).required(true))
            .arg(enzym_arg())
            .arg(alkylation_arg())
            .arg(acetylation_arg()));
}

/// `-v` and `-q` may be given before or after the subcommand.
fn get_log_settings(matches: &ArgMatches) -> (u64, bool) {
    let mut verbosity = matches.occurrences_of("VERBOSE");
    let mut quiet = matches.is_present("QUIET");
    if let (_, Some(subcommand_matches)) = matches.subcommand() {
        verbosity = verbosity.max(subcommand_matches.occurrences_of("VERBOSE"));
        quiet = quiet || subcommand_matches.is_present("QUIET");
    }
    return (verbosity, quiet);
}

fn run(matches: &ArgMatches) -> Result<(), TaskError> {
    match matches.subcommand() {
        ("precursors", Some(precursors_matches)) => {
            let arguments = PrecursorsArguments::from_cli_args(precursors_matches)?;
            let summary = precursors::precursors_task(&arguments)?;
            info!("{}", summary);
        },
        ("coverage", Some(coverage_matches)) => {
            let arguments = CoverageArguments::from_cli_args(coverage_matches)?;
            coverage::coverage_task(&arguments)?;
        },
        ("sequence-mass", Some(sequence_mass_matches)) => {
            let arguments = SequenceMassArguments::from_cli_args(sequence_mass_matches)?;
            sequence_mass::sequence_mass_task(&arguments)?;
        },
        (subcommand, _) => return Err(TaskError::Argument(format!("unknown command '{}'", subcommand)))
    }
    return Ok(());
}

fn main() {
    // a missing .env is fine, the environment may be set otherwise
    let dotenv_path = dotenv::dotenv().ok();
    let matches = build_cli().get_matches();
    let (verbosity, quiet) = get_log_settings(&matches);
    logger::setup_logging(verbosity, quiet);
    if let Some(dotenv_path) = dotenv_path {
        debug!("loaded {}", dotenv_path.display());
    }
    if let Err(err) = run(&matches) {
        eprintln!("ERROR: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("\tcaused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_flags_after_subcommand() {
        let matches = build_cli().get_matches_from_safe(vec!["precursor-coverage", "precursors", "-v", "-v", "-i", "in.fasta", "-o", "out.csv"]).unwrap();
        assert_eq!(get_log_settings(&matches), (2, false));
        let matches = build_cli().get_matches_from_safe(vec!["precursor-coverage", "coverage", "-w", "w.csv", "-p", "p.csv", "-o", "c.csv", "-q"]).unwrap();
        assert_eq!(get_log_settings(&matches), (0, true));
    }

    #[test]
    fn test_log_flags_before_subcommand() {
        let matches = build_cli().get_matches_from_safe(vec!["precursor-coverage", "-v", "sequence-mass", "-s", "PEPTIDEK"]).unwrap();
        assert_eq!(get_log_settings(&matches).0, 1);
    }
}
