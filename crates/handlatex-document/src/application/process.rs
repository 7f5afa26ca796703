//! End-to-end processing of one document.
//!
//! Loads the input, resolves options, randomizes every hand paragraph,
//! writes the `.htex` document and `.hand` batch file, then hands the batch
//! file to the typesetter. Everything that can fail before the first write
//! (missing declaration, bad options, undecodable input) does fail before it.

use std::fs;
use std::path::{Path, PathBuf};

use handlatex_core::error::HandError;
use handlatex_core::options::OptionSet;
use handlatex_core::resolver::{OptionOverrides, resolve};
use handlatex_core::rng::DeterministicRng;
use handlatex_core::typesetter::Typesetter;
use handlatex_randomizer::domain::counters::UsageCounters;
use handlatex_randomizer::domain::randomizer::ParagraphRandomizer;
use serde::Serialize;
use tracing::debug;

use crate::REVISION;
use crate::domain::batch::batch_file;
use crate::domain::paths::OutputPaths;
use crate::domain::scanner::{find_declaration, substitute_paragraphs};
use crate::encoding::{decode, encode};

/// Request to process one document.
#[derive(Debug, Clone)]
pub struct ProcessDocument {
    /// The LaTeX input file.
    pub input: PathBuf,
    /// Options forced on the command line.
    pub overrides: OptionOverrides,
    /// Whether to invoke the typesetter after writing the outputs.
    pub run_driver: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// The effective option set.
    pub options: OptionSet,
    /// Paragraph, word and rotated-word counts.
    pub counters: UsageCounters,
    /// Files written.
    pub outputs: OutputPaths,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> HandError + '_ {
    move |source| HandError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Handles the `ProcessDocument` request.
///
/// # Errors
///
/// Returns `HandError::MissingDeclaration` if the input does not use the hand
/// package, `HandError::Config` for bad options, a decoding or encoding error
/// for text the configured encoding cannot handle, `HandError::Io` for file
/// access failures, and the typesetter's error if the driver fails.
pub fn process_document(
    command: &ProcessDocument,
    rng: Box<dyn DeterministicRng>,
    typesetter: &dyn Typesetter,
) -> Result<RunReport, HandError> {
    let outputs = OutputPaths::for_input(&command.input);

    debug!("loading \"{}\"", command.input.display());
    let bytes = fs::read(&command.input).map_err(io_error(&command.input))?;

    // The declaration is located before the encoding is known.
    let raw = String::from_utf8_lossy(&bytes);
    let declaration = find_declaration(&raw).ok_or(HandError::MissingDeclaration)?;
    let options = resolve(&OptionSet::default(), declaration, &command.overrides)?;
    debug!(
        options = %serde_json::to_string(&options).unwrap_or_default(),
        "resolved options"
    );

    debug!("decoding the file as {}...", options.encoding);
    let text = decode(&bytes, &options.encoding)?;

    debug!("randomizing the document...");
    let (transformed, counters) = {
        let mut randomizer = ParagraphRandomizer::new(rng, &options)?;
        let transformed = substitute_paragraphs(&text, |body| randomizer.transform(body));
        (transformed, randomizer.counters())
    };

    let encoded = encode(&transformed, &options.encoding)?;
    debug!("writing to \"{}\"...", outputs.document.display());
    fs::write(&outputs.document, encoded).map_err(io_error(&outputs.document))?;

    debug!("creating batch file \"{}\"...", outputs.batch.display());
    fs::write(&outputs.batch, batch_file(REVISION, &outputs.document))
        .map_err(io_error(&outputs.batch))?;

    if command.run_driver {
        typesetter.typeset(&options.driver, &outputs.batch)?;
    } else {
        debug!("driver invocation skipped");
    }

    Ok(RunReport {
        options,
        counters,
        outputs,
    })
}
