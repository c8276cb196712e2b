//! The interactive prompt loop.
//!
//! Input comes through the [`LineReader`] trait so the loop can be driven by
//! a real terminal ([`RustylineReader`]) or by a scripted reader in tests.

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use stackcalc_eval::{LineOutcome, PrintHandlerImpl, Session};
use thiserror::Error;

/// Prompt loop settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Printed before each line is read.
    pub prompt: String,
    /// Written to the console when input ends.
    pub farewell: String,
    /// Entries kept in the in-memory history.
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "> ".to_string(),
            farewell: "bye".to_string(),
            max_history: 1000,
        }
    }
}

/// Failures of the line source itself. Calculator errors never surface here.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("line editor failed: {0}")]
    Editor(#[from] ReadlineError),
}

/// Result of asking for one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C: drop the line and prompt again.
    Interrupted,
    /// End of input.
    Eof,
}

/// A source of input lines.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReplError>;

    /// Record a line in history.
    fn add_history(&mut self, line: &str);
}

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The `bye` operator ran.
    Bye,
    /// Input ran out.
    EndOfInput,
}

/// Terminal input with line editing and in-memory history.
pub struct RustylineReader {
    editor: Editor<(), DefaultHistory>,
}

impl RustylineReader {
    pub fn new(config: &ReplConfig) -> Result<Self, ReplError> {
        let editor_config = Config::builder()
            .max_history_size(config.max_history)?
            .auto_add_history(false)
            .build();
        Ok(RustylineReader {
            editor: Editor::with_config(editor_config)?,
        })
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReplError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            tracing::warn!(%err, "could not record history");
        }
    }
}

/// Read and evaluate lines until `bye` or end of input.
///
/// On end of input the farewell text is written to `console`.
pub fn run_repl(
    reader: &mut impl LineReader,
    session: &mut Session,
    console: &PrintHandlerImpl,
    config: &ReplConfig,
) -> Result<ExitReason, ReplError> {
    loop {
        let line = match reader.read_line(&config.prompt) {
            Ok(ReadOutcome::Line(line)) => line,
            Ok(ReadOutcome::Interrupted) => {
                tracing::trace!("line interrupted");
                continue;
            }
            Ok(ReadOutcome::Eof) => {
                console.println(&config.farewell);
                return Ok(ExitReason::EndOfInput);
            }
            Err(err) => {
                tracing::warn!(%err, "line reader failed");
                return Err(err);
            }
        };

        if !line.trim().is_empty() {
            reader.add_history(&line);
        }
        if session.evaluate(&line) == LineOutcome::Halt {
            return Ok(ExitReason::Bye);
        }
    }
}
