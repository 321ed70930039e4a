use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};

use concordance_core::concordance::{Concordance, ConcordanceError};
use concordance_core::types::{ConcordanceConfig, ConfigError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Stop-word file, one word per line
    #[arg(short, long)]
    stop_words: PathBuf,

    /// Text to index
    input: PathBuf,

    /// Where to write the concordance report
    output: PathBuf,

    /// JSON file with starting table capacities
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write a JSON export here
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log table growth and skipped words
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Concordance(#[from] ConcordanceError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(log_level(cli.verbose)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// Skipped words are logged at trace, table growth at debug.
fn log_level(verbose: bool) -> Level {
    if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ConcordanceConfig::from_json_file(path)?,
        None => ConcordanceConfig::v0(),
    };

    let mut concordance = Concordance::from_stop_words_file(config, &cli.stop_words)?;
    concordance.load_concordance_table(&cli.input)?;
    concordance.write_concordance(&cli.output)?;

    if let Some(json) = &cli.json {
        concordance.write_json(json)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_skipped_word_logging() {
        assert_eq!(log_level(true), Level::TRACE);
        assert_eq!(log_level(false), Level::INFO);
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from([
            "concordance",
            "--stop-words",
            "stop.txt",
            "-v",
            "in.txt",
            "out.txt",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.stop_words, PathBuf::from("stop.txt"));
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }
}
