//! Command-line driver for the `ok` editor mode.
//!
//! Runs the mode over a file the way an editor would, line by line, and
//! prints the result: highlighted spans, re-indented text, or the static
//! editor hints.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
