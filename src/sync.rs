//! Synchronization entry points
//!
//! A run goes through `Validate → Enumerate(source) → Enumerate(destination)
//! → Plan → Execute → Report`. Nothing is persisted between runs; every
//! invocation recomputes both trees from scratch.

use std::path::PathBuf;

use crate::callbacks::{NoCallbacks, SyncCallbacks};
use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::execute::Executor;
use crate::logging::*;
use crate::plan::{DestinationIndex, Planner};
use crate::report::SyncReport;
use crate::scan::{enumerate, Enumeration};
use crate::types::{SyncPhase, TreeSide};
use crate::validation::{ensure_destination, validate_source};

/// Run one synchronization from `config.source` into `config.destination`
///
/// Only precondition failures are returned as `Err`. Unreadable directories
/// and per-file failures are recorded in the returned report.
pub fn run(config: &SyncConfig, callbacks: &dyn SyncCallbacks) -> Result<SyncReport, SyncError> {
	callbacks.on_phase(SyncPhase::Validating);
	let config = config.resolve()?;
	validate_source(&config.source)?;
	ensure_destination(&config.destination, config.dry_run)?;

	callbacks.on_phase(SyncPhase::EnumeratingSource);
	info!("Enumerating source tree {}", config.source.display());
	let source = enumerate(&config.source, TreeSide::Source);
	source.failures.iter().for_each(|f| callbacks.on_scan_failure(f));

	callbacks.on_phase(SyncPhase::EnumeratingDestination);
	let destination = if config.destination.is_dir() {
		info!("Enumerating destination tree {}", config.destination.display());
		enumerate(&config.destination, TreeSide::Destination)
	} else {
		// Only reachable in dry-run mode, where the root is never created
		Enumeration::default()
	};
	destination.failures.iter().for_each(|f| callbacks.on_scan_failure(f));
	let index = DestinationIndex::from_files(&destination.files);

	let total = source.len();
	let mut scan_failures = source.failures;
	scan_failures.extend(destination.failures);

	let mut report = SyncReport {
		source: config.source.clone(),
		destination: config.destination.clone(),
		total,
		stats: Default::default(),
		scan_failures,
		dry_run: config.dry_run,
	};

	if source.files.is_empty() {
		info!("Source directory is empty, nothing to sync");
		callbacks.on_phase(SyncPhase::Reporting);
		return Ok(report);
	}

	callbacks.on_phase(SyncPhase::Planning);
	let plan = Planner::new(&config.source, &config.destination, &index).plan(&source.files);

	callbacks.on_phase(SyncPhase::Executing);
	info!("Processing {} source file(s)", total);
	report.stats = Executor::new(&config.source, &config.destination)
		.dry_run(config.dry_run)
		.run(plan, callbacks);

	callbacks.on_phase(SyncPhase::Reporting);
	info!(
		"Done: {} transferred ({} copied, {} updated), {} skipped, {} error(s)",
		report.stats.transferred(),
		report.stats.copied,
		report.stats.updated,
		report.stats.skipped,
		report.stats.errors
	);
	Ok(report)
}

/// Synchronize `source` into `destination` with default options
pub fn sync(
	source: impl Into<PathBuf>,
	destination: impl Into<PathBuf>,
) -> Result<SyncReport, SyncError> {
	run(&SyncConfig::new(source, destination), &NoCallbacks)
}

/// Fluent builder for a synchronization run
pub struct SyncBuilder {
	source: Option<PathBuf>,
	destination: Option<PathBuf>,
	dry_run: bool,
	callbacks: Box<dyn SyncCallbacks>,
}

impl SyncBuilder {
	pub fn new() -> Self {
		SyncBuilder { source: None, destination: None, dry_run: false, callbacks: Box::new(NoCallbacks) }
	}

	/// Set the tree files are read from
	pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
		self.source = Some(path.into());
		self
	}

	/// Set the tree files are written to
	pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
		self.destination = Some(path.into());
		self
	}

	/// Plan and report without writing anything
	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	/// Observe phases, enumeration failures and per-file outcomes
	pub fn callbacks(mut self, callbacks: Box<dyn SyncCallbacks>) -> Self {
		self.callbacks = callbacks;
		self
	}

	/// Assemble the configuration without running
	pub fn build(&self) -> Result<SyncConfig, SyncError> {
		let source = self.source.clone().ok_or_else(|| SyncError::InvalidConfig {
			message: "source directory not set".to_string(),
		})?;
		let destination = self.destination.clone().ok_or_else(|| SyncError::InvalidConfig {
			message: "destination directory not set".to_string(),
		})?;
		Ok(SyncConfig { source, destination, dry_run: self.dry_run })
	}

	/// Run the synchronization
	pub fn sync(self) -> Result<SyncReport, SyncError> {
		let config = self.build()?;
		run(&config, self.callbacks.as_ref())
	}
}

impl Default for SyncBuilder {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
