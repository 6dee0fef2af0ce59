//! Run configuration
//!
//! There is no config file and no environment layer: a [`SyncConfig`] is
//! built from the command line or through [`crate::sync::SyncBuilder`].

use std::path::PathBuf;

use crate::error::SyncError;
use crate::validation::resolve_absolute;

/// Parameters of one synchronization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
	/// Tree that files are read from
	pub source: PathBuf,

	/// Tree that files are written to
	pub destination: PathBuf,

	/// Plan and report without writing anything
	pub dry_run: bool,
}

impl SyncConfig {
	pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
		SyncConfig { source: source.into(), destination: destination.into(), dry_run: false }
	}

	/// Return a copy with both roots made absolute against the current directory
	pub fn resolve(&self) -> Result<SyncConfig, SyncError> {
		if self.source.as_os_str().is_empty() {
			return Err(SyncError::InvalidConfig { message: "source path is empty".to_string() });
		}
		if self.destination.as_os_str().is_empty() {
			return Err(SyncError::InvalidConfig {
				message: "destination path is empty".to_string(),
			});
		}
		Ok(SyncConfig {
			source: resolve_absolute(&self.source)?,
			destination: resolve_absolute(&self.destination)?,
			dry_run: self.dry_run,
		})
	}
}


// vim: ts=4
