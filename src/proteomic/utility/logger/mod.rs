pub mod rejected_protein_logger;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Maps the number of `-v` flags to a level, `quiet` wins over verbosity.
pub fn get_level_filter(verbosity: u64, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    return match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE
    };
}

/// Installs the global subscriber, writing to stderr so the task output on stdout stays clean.
/// Returns false if a subscriber was already set.
pub fn setup_logging(verbosity: u64, quiet: bool) -> bool {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    return tracing_subscriber::registry()
        .with(get_level_filter(verbosity, quiet))
        .with(stderr_layer)
        .try_init()
        .is_ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(get_level_filter(0, false), LevelFilter::WARN);
        assert_eq!(get_level_filter(1, false), LevelFilter::INFO);
        assert_eq!(get_level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(get_level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(get_level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    fn test_setup_only_once() {
        // the first call may already have happened in another test thread
        setup_logging(0, true);
        assert!(!setup_logging(0, true));
    }
}
