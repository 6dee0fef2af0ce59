//! Logging prelude module for convenient access to tracing macros.
//!
//! # Usage
//!
//! ```ignore
//! use crate::logging::*;
//!
//! info!("Enumerating source tree");
//! warn!("Cannot read directory");
//! ```

pub use tracing::{debug, error, info, trace, warn};

/// Map the number of `-v` flags to a default filter directive.
pub fn default_level(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Initialize the tracing subscriber with environment filter support.
///
/// `RUST_LOG` takes precedence; otherwise the level is derived from the
/// verbosity passed on the command line. Logs go to stderr so they never
/// interleave with the progress lines on stdout.
///
/// ```bash
/// RUST_LOG=debug treesync ./src ./backup
/// RUST_LOG=treesync::scan=trace treesync ./src ./backup
/// ```
pub fn init_tracing(verbosity: u8) {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level(verbosity))),
		)
		.with_writer(std::io::stderr)
		.init();
}


// vim: ts=4
