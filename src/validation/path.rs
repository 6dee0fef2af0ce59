//! Path resolution

use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path, folding `.` and `..` components
///
/// The filesystem is not consulted, so symlinks are not resolved. A `..` at
/// the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
	let mut out = PathBuf::new();
	for component in path.components() {
		match component {
			Component::CurDir => {}
			Component::ParentDir => {
				let after_parent = matches!(out.components().next_back(), Some(Component::ParentDir));
				if after_parent || (!out.pop() && !path.has_root()) {
					out.push("..");
				}
			}
			other => out.push(other.as_os_str()),
		}
	}
	if out.as_os_str().is_empty() {
		out.push(".");
	}
	out
}

/// Make `path` absolute against `base` and normalize it
pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
	if path.is_absolute() {
		normalize(path)
	} else {
		normalize(&base.join(path))
	}
}

/// Make `path` absolute against the current working directory
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
	if path.is_absolute() {
		return Ok(normalize(path));
	}
	let cwd = env::current_dir()?;
	Ok(resolve_against(path, &cwd))
}


// vim: ts=4
