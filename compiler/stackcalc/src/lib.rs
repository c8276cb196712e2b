//! Stackcalc - interactive postfix stack calculator.
//!
//! The evaluator lives in `stackcalc_eval`; this crate adds the prompt loop
//! around it and process-level setup.

mod repl;

use std::sync::Once;

pub use repl::{
    run_repl, ExitReason, LineReader, ReadOutcome, ReplConfig, ReplError, RustylineReader,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Does nothing unless `RUST_LOG` is set. Output is an indented tree on
/// stderr, so it never mixes with printed values.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
