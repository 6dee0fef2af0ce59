//! Top-level preconditions of a run
//!
//! These are the only checks whose failure is fatal:
//! - the source root must exist and be a directory
//! - the destination root must exist or be creatable

use std::fs;
use std::io;
use std::path::Path;

use crate::error::SyncError;
use crate::logging::*;

pub mod path;

pub use path::*;

/// Check that the source root exists and is a directory
pub fn validate_source(source: &Path) -> Result<(), SyncError> {
	match fs::metadata(source) {
		Ok(meta) if meta.is_dir() => Ok(()),
		Ok(_) => Err(SyncError::SourceNotDirectory { path: source.to_path_buf() }),
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			Err(SyncError::SourceMissing { path: source.to_path_buf() })
		}
		Err(e) => Err(SyncError::Io(e)),
	}
}

/// Create the destination root (and parents) if it is missing
///
/// Returns `true` if the directory had to be created. In dry-run mode nothing
/// is created and a missing destination is reported as `false`.
pub fn ensure_destination(destination: &Path, dry_run: bool) -> Result<bool, SyncError> {
	if destination.is_dir() {
		return Ok(false);
	}
	if dry_run {
		if destination.exists() {
			return Err(SyncError::DestinationUnavailable {
				path: destination.to_path_buf(),
				source: io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
			});
		}
		debug!("[dry-run] destination {} would be created", destination.display());
		return Ok(false);
	}

	fs::create_dir_all(destination).map_err(|e| SyncError::DestinationUnavailable {
		path: destination.to_path_buf(),
		source: e,
	})?;
	info!("Created destination directory {}", destination.display());
	Ok(true)
}


// vim: ts=4
