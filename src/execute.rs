//! Plan execution
//!
//! Runs the planned action for each source file, one at a time. Any failure
//! is confined to its file: it becomes a [`FileOutcome::Failed`] and the loop
//! moves on. Counters are folded from the outcomes rather than mutated from
//! the outside.

use std::fs;
use std::path::Path;

use crate::callbacks::SyncCallbacks;
use crate::error::{FileError, FileStage};
use crate::logging::*;
use crate::plan::PlanResult;
use crate::report::SyncStats;
use crate::types::{Action, FileOutcome, SyncPlanItem};

/// Applies plan items to the destination tree
pub struct Executor<'a> {
	source_root: &'a Path,
	dest_root: &'a Path,
	dry_run: bool,
}

impl<'a> Executor<'a> {
	pub fn new(source_root: &'a Path, dest_root: &'a Path) -> Self {
		Executor { source_root, dest_root, dry_run: false }
	}

	/// Report what would happen without touching the destination
	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	/// Execute a single planned item
	pub fn apply(&self, item: SyncPlanItem) -> FileOutcome {
		match item.action {
			Action::Skip => FileOutcome::Skipped(item.entry),
			Action::Copy | Action::Update => {
				if let Err(err) = self.transfer(&item) {
					warn!("{}", err);
					return FileOutcome::Failed(err);
				}
				if item.action == Action::Copy {
					FileOutcome::Copied(item.entry)
				} else {
					FileOutcome::Updated(item.entry)
				}
			}
		}
	}

	fn transfer(&self, item: &SyncPlanItem) -> Result<(), FileError> {
		let src = item.entry.under(self.source_root);
		let dst = item.entry.under(self.dest_root);

		if self.dry_run {
			debug!("[dry-run] would copy {} -> {}", src.display(), dst.display());
			return Ok(());
		}

		if let Some(parent) = dst.parent() {
			// create_dir_all is a no-op for existing directories
			fs::create_dir_all(parent)
				.map_err(|e| FileError::new(item.entry.path(), FileStage::CreateDir, e))?;
		}

		let bytes = fs::copy(&src, &dst)
			.map_err(|e| FileError::new(item.entry.path(), FileStage::Copy, e))?;
		debug!("Copied {} ({} bytes)", item.entry, bytes);
		Ok(())
	}

	/// Execute the whole plan, notifying `callbacks` of every outcome
	pub fn run(&self, plan: Vec<PlanResult>, callbacks: &dyn SyncCallbacks) -> SyncStats {
		plan.into_iter()
			.map(|planned| match planned {
				Ok(item) => self.apply(item),
				Err(err) => {
					warn!("{}", err);
					FileOutcome::Failed(err)
				}
			})
			.inspect(|outcome| callbacks.on_file(outcome))
			.fold(SyncStats::default(), |stats, outcome| stats.record(&outcome))
	}
}


// vim: ts=4
