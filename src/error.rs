//! Error types for treesync operations
//!
//! Three scopes of failure exist:
//! - [`SyncError`] is fatal and aborts the run before any file is touched.
//! - [`ScanFailure`] is confined to one directory branch during enumeration.
//! - [`FileError`] is confined to one file during execution.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::types::TreeSide;

/// Fatal error: the run cannot start
#[derive(Debug)]
pub enum SyncError {
	/// Source root does not exist
	SourceMissing { path: PathBuf },

	/// Source root exists but is not a directory
	SourceNotDirectory { path: PathBuf },

	/// Destination root is missing and could not be created
	DestinationUnavailable { path: PathBuf, source: io::Error },

	/// Invalid configuration
	InvalidConfig { message: String },

	/// I/O error
	Io(io::Error),
}

impl fmt::Display for SyncError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SyncError::SourceMissing { path } => {
				write!(f, "Source directory does not exist: \"{}\"", path.display())
			}
			SyncError::SourceNotDirectory { path } => {
				write!(f, "Source path is not a directory: \"{}\"", path.display())
			}
			SyncError::DestinationUnavailable { path, source } => {
				write!(f, "Cannot create destination directory \"{}\": {}", path.display(), source)
			}
			SyncError::InvalidConfig { message } => {
				write!(f, "Invalid configuration: {}", message)
			}
			SyncError::Io(e) => write!(f, "I/O error: {}", e),
		}
	}
}

impl Error for SyncError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			SyncError::DestinationUnavailable { source, .. } => Some(source),
			SyncError::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for SyncError {
	fn from(e: io::Error) -> Self {
		SyncError::Io(e)
	}
}

/// A directory branch that could not be read during enumeration
///
/// The branch contributes zero files; its siblings are still visited.
#[derive(Debug)]
pub struct ScanFailure {
	/// Which tree the branch belongs to
	pub side: TreeSide,

	/// Absolute path of the directory (or entry) that failed
	pub path: PathBuf,

	/// Underlying error
	pub error: io::Error,
}

impl fmt::Display for ScanFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Cannot read {} directory \"{}\": {}", self.side, self.path.display(), self.error)
	}
}

impl Error for ScanFailure {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.error)
	}
}

/// Step of the per-file pipeline that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStage {
	/// Reading modification time of source or destination
	Stat,

	/// Creating the destination parent directory chain
	CreateDir,

	/// Copying file content
	Copy,
}

impl fmt::Display for FileStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FileStage::Stat => write!(f, "stat"),
			FileStage::CreateDir => write!(f, "mkdir"),
			FileStage::Copy => write!(f, "copy"),
		}
	}
}

/// A single file that could not be synchronized
#[derive(Debug)]
pub struct FileError {
	/// Path relative to the tree roots
	pub path: PathBuf,

	/// Failed step
	pub stage: FileStage,

	/// Underlying error
	pub error: io::Error,
}

impl FileError {
	pub fn new(path: impl Into<PathBuf>, stage: FileStage, error: io::Error) -> Self {
		FileError { path: path.into(), stage, error }
	}
}

impl fmt::Display for FileError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} failed for {}: {}", self.stage, self.path.display(), self.error)
	}
}

impl Error for FileError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.error)
	}
}


// vim: ts=4
