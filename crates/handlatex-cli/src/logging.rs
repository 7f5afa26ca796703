//! Logging setup.
//!
//! Two sinks: the console (bare messages, errors flagged with `(ERROR) `)
//! and the `.hlog` transcript next to the input, which records every debug
//! message with a timestamp.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use handlatex_core::error::HandError;
use handlatex_document::domain::paths::OutputPaths;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Console event format: the message alone, first letter capitalized, with a
/// marker on errors.
struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if *event.metadata().level() == Level::ERROR {
            write!(writer, "(ERROR) ")?;
        }

        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;

        let mut chars = message.chars();
        if let Some(first) = chars.next() {
            write!(writer, "{}{}", first.to_uppercase(), chars.as_str())?;
        }
        writeln!(writer)
    }
}

/// A transcript file opened next to an input document.
pub struct Transcript {
    /// Where the transcript is written.
    pub path: PathBuf,
    /// The freshly truncated transcript.
    pub file: File,
}

/// Creates the `.hlog` transcript for `input`.
///
/// Returns `Ok(None)` when `input` is not an existing file, so a mistyped
/// path leaves nothing behind.
///
/// # Errors
///
/// Returns `HandError::Io` if the transcript cannot be created.
pub fn open_transcript(input: &Path) -> Result<Option<Transcript>, HandError> {
    if !input.is_file() {
        return Ok(None);
    }

    let path = OutputPaths::for_input(input).transcript;
    match File::create(&path) {
        Ok(file) => Ok(Some(Transcript { path, file })),
        Err(source) => Err(HandError::Io { path, source }),
    }
}

/// Installs the global subscriber.
///
/// Console verbosity comes from `RUST_LOG` (default `info`) unless `verbose`
/// forces `debug`. The transcript, when given, always records `debug`.
pub fn init(verbose: bool, transcript: Option<File>) {
    let console_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .event_format(ConsoleFormat)
        .with_filter(console_filter);

    let transcript = transcript.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .with_filter(LevelFilter::DEBUG)
    });

    tracing_subscriber::registry()
        .with(console)
        .with(transcript)
        .init();
}
