//! Diff planning
//!
//! Classifies every source file as Copy, Update or Skip by looking it up in
//! an index of destination-relative paths and comparing modification times.
//! Change detection is mtime-only: a source file is newer only when its mtime
//! is strictly greater than the destination's. Ties go to the destination.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{FileError, FileStage};
use crate::logging::*;
use crate::types::{Action, FileEntry, SyncPlanItem};

/// Planning result for one source file
pub type PlanResult = Result<SyncPlanItem, FileError>;

/// Set of relative paths present in the destination tree
///
/// Built once per run from the destination enumeration.
#[derive(Debug, Default, Clone)]
pub struct DestinationIndex {
	keys: HashSet<PathBuf>,
}

impl DestinationIndex {
	pub fn from_files(files: &[FileEntry]) -> Self {
		files.iter().cloned().collect()
	}

	pub fn contains(&self, path: &Path) -> bool {
		self.keys.contains(path)
	}

	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

impl FromIterator<FileEntry> for DestinationIndex {
	fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
		DestinationIndex { keys: iter.into_iter().map(|e| e.path().to_path_buf()).collect() }
	}
}

/// Decide the action for a file given both modification times
///
/// `dest_mtime` is `None` when the file is absent from the destination.
pub fn decide(source_mtime: SystemTime, dest_mtime: Option<SystemTime>) -> Action {
	match dest_mtime {
		None => Action::Copy,
		Some(dest) if source_mtime > dest => Action::Update,
		Some(_) => Action::Skip,
	}
}

fn modified(path: &Path) -> io::Result<SystemTime> {
	fs::metadata(path)?.modified()
}

/// Classifies source files against one destination tree
pub struct Planner<'a> {
	source_root: &'a Path,
	dest_root: &'a Path,
	index: &'a DestinationIndex,
}

impl<'a> Planner<'a> {
	pub fn new(source_root: &'a Path, dest_root: &'a Path, index: &'a DestinationIndex) -> Self {
		Planner { source_root, dest_root, index }
	}

	/// Classify a single source file
	///
	/// Stat failures on either side are reported as a file-local error.
	pub fn classify(&self, entry: &FileEntry) -> PlanResult {
		let stat_err = |e| FileError::new(entry.path(), FileStage::Stat, e);

		let source_mtime = modified(&entry.under(self.source_root)).map_err(stat_err)?;
		let dest_mtime = if self.index.contains(entry.path()) {
			Some(modified(&entry.under(self.dest_root)).map_err(stat_err)?)
		} else {
			None
		};

		let action = decide(source_mtime, dest_mtime);
		debug!("Planned {:?} for {}", action, entry);
		Ok(SyncPlanItem { entry: entry.clone(), action, source_mtime, dest_mtime })
	}

	/// Classify every source file, preserving enumeration order
	pub fn plan(&self, files: &[FileEntry]) -> Vec<PlanResult> {
		files.iter().map(|entry| self.classify(entry)).collect()
	}
}


// vim: ts=4
