//! Output channels for a calculator session.
//!
//! A session writes printed values (`pop`, `peek`, `examine`) to one handler
//! and `Error: ...` lines to another. Each is either a standard stream or an
//! in-memory capture that tests read back.

use std::io::Write as _;
use std::sync::Arc;

use parking_lot::Mutex;

/// A standard output stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

impl Stream {
    fn write_line(self, line: &str) {
        // A closed terminal is not a calculator error; drop the text.
        let _ = match self {
            Stream::Stdout => writeln!(std::io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(std::io::stderr().lock(), "{line}"),
        };
    }
}

/// Line sink using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes each line to a standard stream.
    Stream(Stream),
    /// Keeps every line, newline-terminated, in memory.
    Capture(Mutex<String>),
}

impl PrintHandlerImpl {
    /// Emit one line.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stream(stream) => stream.write_line(line),
            Self::Capture(text) => {
                let mut text = text.lock();
                text.push_str(line);
                text.push('\n');
            }
        }
    }

    /// Everything captured so far; empty for stream handlers.
    pub fn get_output(&self) -> String {
        match self {
            Self::Capture(text) => text.lock().clone(),
            Self::Stream(_) => String::new(),
        }
    }

    /// Forget captured text.
    pub fn clear(&self) {
        if let Self::Capture(text) = self {
            text.lock().clear();
        }
    }
}

/// Handler shared between a session and whoever inspects its output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stream(Stream::Stdout))
}

pub fn stderr_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stream(Stream::Stderr))
}

/// Handler that captures lines for later inspection.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Capture(Mutex::new(String::new())))
}
