//! Console output for CLI runs
//!
//! Prints one tagged line per file as it is processed, plus the banner and
//! the final summary. Successful outcomes go to stdout, failures to stderr.

pub mod constants;

use tracing::info;

use crate::callbacks::SyncCallbacks;
use crate::config::SyncConfig;
use crate::error::ScanFailure;
use crate::report::{SyncReport, Verdict};
use crate::types::{FileOutcome, SyncPhase};

/// Progress display constants
pub use constants::*;

/// Format the progress line for one file outcome
pub fn format_outcome(outcome: &FileOutcome, dry_run: bool) -> String {
	let suffix = match outcome {
		FileOutcome::Skipped(_) => " (already up to date)".to_string(),
		FileOutcome::Failed(err) => format!(" -> {}: {}", err.stage, err.error),
		_ if dry_run => " (dry run)".to_string(),
		_ => String::new(),
	};
	format!("{:<width$} : {}{}", outcome.tag(), outcome.path().display(), suffix, width = TAG_WIDTH)
}

/// Banner printed before the run starts
pub fn format_banner(config: &SyncConfig) -> String {
	let rule = "-".repeat(RULE_WIDTH);
	let title = if config.dry_run { "File Synchronization (dry run)" } else { "File Synchronization" };
	format!(
		"{}\n{}\n  Source      : {}\n  Destination : {}\n{}\n",
		title,
		rule,
		config.source.display(),
		config.destination.display(),
		rule
	)
}

/// CLI progress callback
pub struct ConsoleReporter {
	dry_run: bool,
}

impl ConsoleReporter {
	pub fn new(dry_run: bool) -> Self {
		Self { dry_run }
	}

	/// Print the summary block and verdict for a finished run
	pub fn print_report(&self, report: &SyncReport) {
		match report.verdict() {
			Verdict::NothingToSync => println!("{}", Verdict::NothingToSync),
			verdict => {
				println!();
				print!("{}", report.summary());
				println!();
				println!("{}", verdict);
				if report.is_success() && !report.scan_failures.is_empty() {
					println!(
						"{} unreadable director(ies) were not synced. Check above for details.",
						report.scan_failures.len()
					);
				}
			}
		}
	}
}

impl Default for ConsoleReporter {
	fn default() -> Self {
		Self::new(false)
	}
}

impl SyncCallbacks for ConsoleReporter {
	fn on_phase(&self, phase: SyncPhase) {
		info!("→ {:?} phase...", phase);
	}

	fn on_scan_failure(&self, failure: &ScanFailure) {
		eprintln!("{:<width$} : {}", "ERROR", failure, width = TAG_WIDTH);
	}

	fn on_file(&self, outcome: &FileOutcome) {
		let line = format_outcome(outcome, self.dry_run);
		if outcome.is_failure() {
			eprintln!("{}", line);
		} else {
			println!("{}", line);
		}
	}
}


// vim: ts=4
