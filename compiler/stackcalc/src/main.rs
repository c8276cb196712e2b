//! Stackcalc CLI
//!
//! Reads lines from the terminal and evaluates them until `bye` or end of
//! input.

use stackcalc::{init_tracing, run_repl, ReplConfig, RustylineReader};
use stackcalc_eval::{stderr_handler, Session};

fn main() {
    init_tracing();

    let config = ReplConfig::default();
    let mut reader = match RustylineReader::new(&config) {
        Ok(reader) => reader,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new();
    let console = stderr_handler();
    match run_repl(&mut reader, &mut session, &console, &config) {
        Ok(reason) => {
            tracing::debug!(?reason, "session ended");
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
