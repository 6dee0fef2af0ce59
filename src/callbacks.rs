//! Callback traits for progress reporting and event handling

use crate::error::ScanFailure;
use crate::types::{FileOutcome, SyncPhase};

// Type aliases to reduce complexity
type PhaseFn = dyn Fn(SyncPhase) + Send + Sync;
type ScanFailureFn = dyn Fn(&ScanFailure) + Send + Sync;
type FileFn = dyn Fn(&FileOutcome) + Send + Sync;

/// Observer for the events of one run
///
/// All methods default to doing nothing.
pub trait SyncCallbacks: Send + Sync {
	/// Called when the run enters a new phase
	fn on_phase(&self, _phase: SyncPhase) {}

	/// Called for every directory branch that could not be enumerated
	fn on_scan_failure(&self, _failure: &ScanFailure) {}

	/// Called once per source file after its action completed or failed
	fn on_file(&self, _outcome: &FileOutcome) {}
}

/// Default callback implementation that does nothing
pub struct NoCallbacks;

impl SyncCallbacks for NoCallbacks {}

/// Builder for callbacks using function closures
pub struct CallbackBuilder {
	phase: Option<Box<PhaseFn>>,
	scan_failure: Option<Box<ScanFailureFn>>,
	file: Option<Box<FileFn>>,
}

impl CallbackBuilder {
	/// Create a new callback builder
	pub fn new() -> Self {
		CallbackBuilder { phase: None, scan_failure: None, file: None }
	}

	/// Set phase change callback
	pub fn on_phase<F>(mut self, callback: F) -> Self
	where
		F: Fn(SyncPhase) + Send + Sync + 'static,
	{
		self.phase = Some(Box::new(callback));
		self
	}

	/// Set enumeration failure callback
	pub fn on_scan_failure<F>(mut self, callback: F) -> Self
	where
		F: Fn(&ScanFailure) + Send + Sync + 'static,
	{
		self.scan_failure = Some(Box::new(callback));
		self
	}

	/// Set per-file outcome callback
	pub fn on_file<F>(mut self, callback: F) -> Self
	where
		F: Fn(&FileOutcome) + Send + Sync + 'static,
	{
		self.file = Some(Box::new(callback));
		self
	}

	/// Build the callbacks handler
	pub fn build(self) -> Box<dyn SyncCallbacks> {
		Box::new(CompositeCallbacks {
			phase: self.phase,
			scan_failure: self.scan_failure,
			file: self.file,
		})
	}
}

impl Default for CallbackBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Internal composite callbacks implementation
struct CompositeCallbacks {
	phase: Option<Box<PhaseFn>>,
	scan_failure: Option<Box<ScanFailureFn>>,
	file: Option<Box<FileFn>>,
}

impl SyncCallbacks for CompositeCallbacks {
	fn on_phase(&self, phase: SyncPhase) {
		if let Some(ref callback) = self.phase {
			callback(phase);
		}
	}

	fn on_scan_failure(&self, failure: &ScanFailure) {
		if let Some(ref callback) = self.scan_failure {
			callback(failure);
		}
	}

	fn on_file(&self, outcome: &FileOutcome) {
		if let Some(ref callback) = self.file {
			callback(outcome);
		}
	}
}


// vim: ts=4
