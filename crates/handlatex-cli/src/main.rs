//! handLaTeX driver entry point.

use std::process::ExitCode;

use clap::Parser;
use handlatex_core::rng::{DeterministicRng, SeededRng};
use handlatex_document::application::process::{ProcessDocument, process_document};
use handlatex_document::process_typesetter::ProcessTypesetter;
use tracing::{debug, error, info};

mod cli;
mod logging;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Open the transcript first so that everything below is recorded. A
    // missing input gets no transcript.
    let transcript = match logging::open_transcript(&cli.input) {
        Ok(transcript) => transcript,
        Err(err) => {
            logging::init(cli.verbose, None);
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let transcript_path = transcript.as_ref().map(|transcript| transcript.path.clone());
    logging::init(cli.verbose, transcript.map(|transcript| transcript.file));

    info!("this is handLaTeX {}", env!("CARGO_PKG_VERSION"));

    let rng: Box<dyn DeterministicRng> = match cli.seed {
        Some(seed) => {
            debug!("using fixed random seed {seed}");
            Box::new(SeededRng::from_seed(seed))
        }
        None => Box::new(SeededRng::from_os_entropy()),
    };

    let command = ProcessDocument {
        input: cli.input.clone(),
        overrides: cli.overrides(),
        run_driver: !cli.no_driver,
    };

    let code = match process_document(&command, rng, &ProcessTypesetter) {
        Ok(report) => {
            debug!("operation completed successfully");
            debug!(
                report = %serde_json::to_string(&report).unwrap_or_default(),
                "run report"
            );
            info!("{}", report.counters);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    };

    if let Some(path) = transcript_path {
        info!("high-level transcript written on \"{}\"", path.display());
    }
    code
}
