//! Tree enumeration
//!
//! Walks a root depth-first and collects every regular file as a path
//! relative to that root. Directories are descended into but never emitted.
//! Symlinks and special files are ignored.
//!
//! A directory that cannot be read contributes nothing; the failure is
//! recorded and the walk continues with its siblings.

use std::fs;
use std::path::Path;

use crate::error::ScanFailure;
use crate::logging::*;
use crate::types::{FileEntry, TreeSide};

/// Result of walking one tree
#[derive(Debug, Default)]
pub struct Enumeration {
	/// Regular files, relative to the root, in walk order
	pub files: Vec<FileEntry>,

	/// Branches that could not be read
	pub failures: Vec<ScanFailure>,
}

impl Enumeration {
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}
}

/// Recursively list all regular files under `root`
pub fn enumerate(root: &Path, side: TreeSide) -> Enumeration {
	let mut result = Enumeration::default();
	walk(root, Path::new(""), side, &mut result);
	debug!(
		"Enumerated {} {} file(s) under {} ({} unreadable branch(es))",
		result.files.len(),
		side,
		root.display(),
		result.failures.len()
	);
	result
}

fn walk(dir: &Path, rel: &Path, side: TreeSide, out: &mut Enumeration) {
	let entries = match fs::read_dir(dir) {
		Ok(e) => e,
		Err(e) => {
			warn!("Cannot read directory {}: {}", dir.display(), e);
			out.failures.push(ScanFailure { side, path: dir.to_path_buf(), error: e });
			return;
		}
	};

	for entry_result in entries {
		let entry = match entry_result {
			Ok(e) => e,
			Err(e) => {
				warn!("Error reading entry in {}: {}", dir.display(), e);
				out.failures.push(ScanFailure { side, path: dir.to_path_buf(), error: e });
				continue;
			}
		};

		let path = entry.path();
		let file_type = match entry.file_type() {
			Ok(t) => t,
			Err(e) => {
				warn!("Cannot access {}: {}", path.display(), e);
				out.failures.push(ScanFailure { side, path, error: e });
				continue;
			}
		};

		let relative_path = rel.join(entry.file_name());
		if file_type.is_dir() {
			walk(&path, &relative_path, side, out);
		} else if file_type.is_file() {
			trace!("Found {}", relative_path.display());
			out.files.push(FileEntry::new(relative_path));
		}
	}
}


// vim: ts=4
