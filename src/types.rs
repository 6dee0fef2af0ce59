//! Core data types shared by the enumerator, planner and executor

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::FileError;

/// Which of the two trees a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSide {
	Source,
	Destination,
}

impl fmt::Display for TreeSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TreeSide::Source => write!(f, "source"),
			TreeSide::Destination => write!(f, "destination"),
		}
	}
}

/// Phases of a single run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
	Validating,
	EnumeratingSource,
	EnumeratingDestination,
	Planning,
	Executing,
	Reporting,
}

/// A regular file discovered under a tree root
///
/// The path is relative to the root, so the same logical file in both trees
/// yields an identical key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileEntry {
	path: PathBuf,
}

impl FileEntry {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		FileEntry { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Absolute location of this entry under `root`
	pub fn under(&self, root: &Path) -> PathBuf {
		root.join(&self.path)
	}
}

impl fmt::Display for FileEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.path.display())
	}
}

/// What to do with one source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Absent from the destination
	Copy,
	/// Present in the destination, source is strictly newer
	Update,
	/// Present in the destination, destination is as new or newer
	Skip,
}

/// A source file paired with its planned action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlanItem {
	pub entry: FileEntry,
	pub action: Action,
	/// Modification time of the source file
	pub source_mtime: SystemTime,
	/// Modification time of the existing destination file (Update/Skip only)
	pub dest_mtime: Option<SystemTime>,
}

/// Final state of one file after execution
#[derive(Debug)]
pub enum FileOutcome {
	Copied(FileEntry),
	Updated(FileEntry),
	Skipped(FileEntry),
	Failed(FileError),
}

impl FileOutcome {
	/// Relative path the outcome refers to
	pub fn path(&self) -> &Path {
		match self {
			FileOutcome::Copied(e) | FileOutcome::Updated(e) | FileOutcome::Skipped(e) => e.path(),
			FileOutcome::Failed(err) => err.path.as_path(),
		}
	}

	/// Tag used in progress output
	pub fn tag(&self) -> &'static str {
		match self {
			FileOutcome::Copied(_) => "COPIED",
			FileOutcome::Updated(_) => "UPDATED",
			FileOutcome::Skipped(_) => "SKIPPED",
			FileOutcome::Failed(_) => "ERROR",
		}
	}

	pub fn is_failure(&self) -> bool {
		matches!(self, FileOutcome::Failed(_))
	}
}


// vim: ts=4
