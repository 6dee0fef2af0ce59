//! Run statistics and the final summary

use std::fmt;
use std::path::PathBuf;

use crate::error::ScanFailure;
use crate::progress::RULE_WIDTH;
use crate::types::FileOutcome;

/// Per-outcome counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
	pub copied: usize,
	pub updated: usize,
	pub skipped: usize,
	pub errors: usize,
}

impl SyncStats {
	/// Fold one file outcome into the counters
	pub fn record(mut self, outcome: &FileOutcome) -> Self {
		match outcome {
			FileOutcome::Copied(_) => self.copied += 1,
			FileOutcome::Updated(_) => self.updated += 1,
			FileOutcome::Skipped(_) => self.skipped += 1,
			FileOutcome::Failed(_) => self.errors += 1,
		}
		self
	}

	/// Number of files accounted for; equals the source file count
	pub fn total(&self) -> usize {
		self.copied + self.updated + self.skipped + self.errors
	}

	/// Files whose content was written (or would be, in a dry run)
	pub fn transferred(&self) -> usize {
		self.copied + self.updated
	}
}

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
	/// Source tree was fully readable and had no files
	NothingToSync,
	/// Every file was processed without error
	Success,
	/// Some files failed
	PartialFailure { errors: usize },
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Verdict::NothingToSync => write!(f, "Source directory is empty. Nothing to sync."),
			Verdict::Success => write!(f, "Synchronization completed successfully!"),
			Verdict::PartialFailure { errors } => write!(
				f,
				"Synchronization completed with {} error(s). Check above for details.",
				errors
			),
		}
	}
}

/// Value returned by a run
#[derive(Debug)]
pub struct SyncReport {
	/// Absolute source root
	pub source: PathBuf,

	/// Absolute destination root
	pub destination: PathBuf,

	/// Number of source files examined
	pub total: usize,

	/// Execution outcomes
	pub stats: SyncStats,

	/// Enumeration failures from both trees, tracked apart from `stats.errors`
	pub scan_failures: Vec<ScanFailure>,

	/// Whether the run was planned only
	pub dry_run: bool,
}

impl SyncReport {
	pub fn verdict(&self) -> Verdict {
		if self.total == 0 && self.scan_failures.is_empty() {
			Verdict::NothingToSync
		} else if self.stats.errors == 0 {
			Verdict::Success
		} else {
			Verdict::PartialFailure { errors: self.stats.errors }
		}
	}

	pub fn is_success(&self) -> bool {
		self.stats.errors == 0
	}

	/// Render the aggregate summary block
	pub fn summary(&self) -> String {
		let rule = "-".repeat(RULE_WIDTH);
		let mut out = String::new();
		out.push_str(&rule);
		out.push('\n');
		if self.dry_run {
			out.push_str("Sync Summary (dry run)\n");
		} else {
			out.push_str("Sync Summary\n");
		}
		out.push_str(&rule);
		out.push('\n');
		out.push_str(&format!("  Files copied     : {}\n", self.stats.copied));
		out.push_str(&format!("  Files updated    : {}\n", self.stats.updated));
		out.push_str(&format!("  Files skipped    : {}\n", self.stats.skipped));
		out.push_str(&format!("  Errors           : {}\n", self.stats.errors));
		if !self.scan_failures.is_empty() {
			out.push_str(&format!("  Unreadable dirs  : {}\n", self.scan_failures.len()));
		}
		out.push_str(&rule);
		out.push('\n');
		out.push_str(&format!("  Total processed  : {}\n", self.total));
		out.push_str(&rule);
		out.push('\n');
		out
	}
}


// vim: ts=4
