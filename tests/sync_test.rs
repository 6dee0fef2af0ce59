//! Real file integration tests for one-way synchronization
//!
//! Each test builds source and destination trees on disk, runs a sync and
//! checks both the returned report and the resulting destination contents.

use filetime::{set_file_mtime, FileTime};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use treesync::callbacks::CallbackBuilder;
use treesync::sync::{sync, SyncBuilder};
use treesync::{FileOutcome, FileStage, SyncError, TreeSide, Verdict};

const T1: i64 = 1_600_000_000;
const T2: i64 = 1_700_000_000;

/// Helper to create a file (and its parents) with content and a pinned mtime
fn create_file(dir: &Path, name: &str, content: &str, mtime: i64) {
	let path = dir.join(name);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(&path, content).unwrap();
	set_file_mtime(&path, FileTime::from_unix_time(mtime, 0)).unwrap();
}

/// Helper to read file content (returns None if file doesn't exist)
fn read_file(dir: &Path, name: &str) -> Option<String> {
	fs::read_to_string(dir.join(name)).ok()
}

/// Recursive listing of every entry (files and directories) under `root`
fn listing(root: &Path) -> BTreeSet<PathBuf> {
	fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<PathBuf>) {
		for entry in fs::read_dir(dir).unwrap() {
			let path = entry.unwrap().path();
			out.insert(path.strip_prefix(root).unwrap().to_path_buf());
			if path.is_dir() {
				walk(root, &path, out);
			}
		}
	}
	let mut out = BTreeSet::new();
	walk(root, root, &mut out);
	out
}

/// Records every per-file outcome as (tag, path)
fn recording_callbacks() -> (Arc<Mutex<Vec<(String, PathBuf)>>>, CallbackBuilder) {
	let seen = Arc::new(Mutex::new(Vec::new()));
	let s = seen.clone();
	let builder = CallbackBuilder::new().on_file(move |outcome: &FileOutcome| {
		s.lock().unwrap().push((outcome.tag().to_string(), outcome.path().to_path_buf()));
	});
	(seen, builder)
}

// ===================================================================
// CLASSIFICATION
// ===================================================================

#[test]
fn test_first_sync_copies_single_file() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "a.txt", "A", T1);

	let report = sync(src.path(), dst.path()).expect("Sync should succeed");

	assert_eq!(report.stats.copied, 1);
	assert_eq!(report.stats.total(), 1);
	assert_eq!(read_file(dst.path(), "a.txt"), Some("A".to_string()));
	assert_eq!(report.verdict(), Verdict::Success);
}

#[test]
fn test_newer_source_updates_destination() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "a.txt", "B", T2);
	create_file(dst.path(), "a.txt", "A", T1);

	let report = sync(src.path(), dst.path()).unwrap();

	assert_eq!(report.stats.updated, 1);
	assert_eq!(report.stats.copied, 0);
	assert_eq!(read_file(dst.path(), "a.txt"), Some("B".to_string()));
}

#[test]
fn test_equal_mtime_is_skipped() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "same.txt", "source", T1);
	create_file(dst.path(), "same.txt", "destination", T1);

	let report = sync(src.path(), dst.path()).unwrap();

	assert_eq!(report.stats.skipped, 1);
	assert_eq!(report.stats.updated, 0);
	// Content differs but the tie goes to the destination
	assert_eq!(read_file(dst.path(), "same.txt"), Some("destination".to_string()));
}

#[test]
fn test_older_source_is_skipped() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "f.txt", "old", T1);
	create_file(dst.path(), "f.txt", "new", T2);

	let report = sync(src.path(), dst.path()).unwrap();

	assert_eq!(report.stats.skipped, 1);
	assert_eq!(read_file(dst.path(), "f.txt"), Some("new".to_string()));
}

#[test]
fn test_mixed_tree_classification() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "new.txt", "n", T1);
	create_file(src.path(), "docs/changed.md", "v2", T2);
	create_file(src.path(), "docs/deep/same.md", "s", T1);
	create_file(dst.path(), "docs/changed.md", "v1", T1);
	create_file(dst.path(), "docs/deep/same.md", "s", T1);
	create_file(dst.path(), "only-in-dest.txt", "keep me", T1);

	let (seen, builder) = recording_callbacks();
	let report = SyncBuilder::new()
		.source(src.path())
		.destination(dst.path())
		.callbacks(builder.build())
		.sync()
		.unwrap();

	assert_eq!(report.stats.copied, 1);
	assert_eq!(report.stats.updated, 1);
	assert_eq!(report.stats.skipped, 1);
	assert_eq!(report.stats.errors, 0);

	let seen: BTreeSet<(String, PathBuf)> = seen.lock().unwrap().iter().cloned().collect();
	let expected: BTreeSet<(String, PathBuf)> = [
		("COPIED", "new.txt"),
		("UPDATED", "docs/changed.md"),
		("SKIPPED", "docs/deep/same.md"),
	]
	.iter()
	.map(|(t, p)| (t.to_string(), PathBuf::from(p)))
	.collect();
	assert_eq!(seen, expected);

	// No deletion propagation
	assert_eq!(read_file(dst.path(), "only-in-dest.txt"), Some("keep me".to_string()));
}

#[test]
fn test_nested_directories_are_created() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "a/b/c/d.txt", "deep", T1);

	sync(src.path(), dst.path()).unwrap();

	assert!(dst.path().join("a/b/c").is_dir());
	assert_eq!(read_file(dst.path(), "a/b/c/d.txt"), Some("deep".to_string()));
}

#[test]
fn test_binary_content_is_preserved() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	let data: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
	fs::write(src.path().join("blob.bin"), &data).unwrap();

	sync(src.path(), dst.path()).unwrap();

	assert_eq!(fs::read(dst.path().join("blob.bin")).unwrap(), data);
}

// ===================================================================
// RUN-LEVEL PROPERTIES
// ===================================================================

#[test]
fn test_second_run_is_idempotent() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "one.txt", "1", T1);
	create_file(src.path(), "sub/two.txt", "2", T1);
	create_file(src.path(), "sub/inner/three.txt", "3", T2);

	let first = sync(src.path(), dst.path()).unwrap();
	assert_eq!(first.stats.copied, 3);

	let second = sync(src.path(), dst.path()).unwrap();
	assert_eq!(second.stats.copied, 0);
	assert_eq!(second.stats.updated, 0);
	assert_eq!(second.stats.skipped, 3);
	assert_eq!(second.stats.errors, 0);
}

#[test]
fn test_outcomes_sum_to_source_count() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	for i in 0..12 {
		create_file(src.path(), &format!("d{}/f{}.txt", i % 3, i), "x", T2);
	}
	for i in 0..6 {
		create_file(dst.path(), &format!("d{}/f{}.txt", i % 3, i), "y", if i % 2 == 0 { T1 } else { T2 });
	}
	// A directory where a file should go forces one copy failure
	fs::create_dir_all(dst.path().join("d2/f11.txt")).unwrap();

	let report = sync(src.path(), dst.path()).unwrap();

	assert_eq!(report.total, 12);
	assert_eq!(report.stats.total(), report.total);
	assert_eq!(report.stats.errors, 1);
	assert_eq!(report.stats.updated, 3);
	assert_eq!(report.stats.skipped, 3);
	assert_eq!(report.stats.copied, 5);
}

#[test]
fn test_empty_source_is_nothing_to_sync() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	fs::create_dir_all(src.path().join("just/dirs")).unwrap();

	let report = sync(src.path(), dst.path()).unwrap();

	assert_eq!(report.total, 0);
	assert_eq!(report.verdict(), Verdict::NothingToSync);
	assert!(listing(dst.path()).is_empty());
}

#[test]
fn test_missing_destination_is_created() {
	let src = TempDir::new().unwrap();
	let root = TempDir::new().unwrap();
	let dst = root.path().join("new/backup");
	create_file(src.path(), "a.txt", "A", T1);

	let report = sync(src.path(), &dst).unwrap();

	assert_eq!(report.stats.copied, 1);
	assert_eq!(read_file(&dst, "a.txt"), Some("A".to_string()));
}

#[test]
fn test_report_paths_are_absolute() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "a.txt", "A", T1);

	let report = sync(src.path().join("."), dst.path()).unwrap();

	assert!(report.source.is_absolute());
	assert_eq!(report.source, src.path().to_path_buf());
	assert_eq!(report.destination, dst.path().to_path_buf());
}

// ===================================================================
// FATAL PRECONDITIONS
// ===================================================================

#[test]
fn test_missing_source_leaves_destination_untouched() {
	let root = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(dst.path(), "existing.txt", "E", T1);
	create_file(dst.path(), "sub/nested.txt", "N", T1);
	let before = listing(dst.path());

	let err = sync(root.path().join("does-not-exist"), dst.path()).unwrap_err();

	assert!(matches!(err, SyncError::SourceMissing { .. }));
	assert_eq!(listing(dst.path()), before);
}

#[test]
fn test_missing_source_does_not_create_destination() {
	let root = TempDir::new().unwrap();
	let dst = root.path().join("would-be-created");

	let err = sync(root.path().join("nope"), &dst).unwrap_err();

	assert!(matches!(err, SyncError::SourceMissing { .. }));
	assert!(!dst.exists());
}

#[test]
fn test_source_file_is_rejected() {
	let root = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(root.path(), "plain.txt", "p", T1);

	let err = sync(root.path().join("plain.txt"), dst.path()).unwrap_err();
	assert!(matches!(err, SyncError::SourceNotDirectory { .. }));
}

#[test]
fn test_uncreatable_destination_is_fatal() {
	let src = TempDir::new().unwrap();
	let root = TempDir::new().unwrap();
	create_file(src.path(), "a.txt", "A", T1);
	create_file(root.path(), "blocker", "not a dir", T1);

	let err = sync(src.path(), root.path().join("blocker/dest")).unwrap_err();
	assert!(matches!(err, SyncError::DestinationUnavailable { .. }));
}

// ===================================================================
// FAILURE ISOLATION
// ===================================================================

#[test]
fn test_parent_collision_fails_only_that_file() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "sub/a.txt", "A", T1);
	create_file(src.path(), "b.txt", "B", T1);
	create_file(dst.path(), "sub", "a file, not a directory", T1);

	let failures = Arc::new(Mutex::new(Vec::new()));
	let f = failures.clone();
	let callbacks = CallbackBuilder::new()
		.on_file(move |outcome| {
			if let FileOutcome::Failed(err) = outcome {
				f.lock().unwrap().push((err.path.clone(), err.stage));
			}
		})
		.build();

	let report = SyncBuilder::new()
		.source(src.path())
		.destination(dst.path())
		.callbacks(callbacks)
		.sync()
		.unwrap();

	assert_eq!(report.stats.errors, 1);
	assert_eq!(report.stats.copied, 1);
	assert!(matches!(report.verdict(), Verdict::PartialFailure { errors: 1 }));
	assert_eq!(*failures.lock().unwrap(), vec![(PathBuf::from("sub/a.txt"), FileStage::CreateDir)]);
	assert_eq!(read_file(dst.path(), "b.txt"), Some("B".to_string()));
}

#[cfg(unix)]
#[test]
fn test_unreadable_source_subtree_is_local() {
	use std::os::unix::fs::PermissionsExt;

	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "ok.txt", "fine", T1);
	create_file(src.path(), "open/also-ok.txt", "fine too", T1);
	create_file(src.path(), "locked/secret.txt", "hidden", T1);

	let locked = src.path().join("locked");
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
	if fs::read_dir(&locked).is_ok() {
		// Running with privileges that bypass permission bits
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
		return;
	}

	let report = sync(src.path(), dst.path());
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
	let report = report.unwrap();

	// Enumeration failure is tracked apart from execution errors
	assert_eq!(report.scan_failures.len(), 1);
	assert_eq!(report.scan_failures[0].side, TreeSide::Source);
	assert_eq!(report.scan_failures[0].path, locked);
	assert_eq!(report.stats.errors, 0);
	assert_eq!(report.stats.copied, 2);
	assert_eq!(report.total, 2);
	assert!(report.is_success());
	assert_eq!(read_file(dst.path(), "open/also-ok.txt"), Some("fine too".to_string()));
	assert!(!dst.path().join("locked").exists());
}

#[cfg(unix)]
#[test]
fn test_unreadable_destination_subtree_counts_separately() {
	use std::os::unix::fs::PermissionsExt;

	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "plain.txt", "p", T1);
	create_file(src.path(), "locked/f.txt", "new", T2);
	create_file(dst.path(), "locked/f.txt", "old", T1);

	let locked = dst.path().join("locked");
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
	if fs::read_dir(&locked).is_ok() {
		// Running with privileges that bypass permission bits
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
		return;
	}

	let report = sync(src.path(), dst.path());
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
	let report = report.unwrap();

	// The unreadable branch hides locked/f.txt, so it is planned as a copy
	// and the write into the locked directory fails at execution time
	assert_eq!(report.scan_failures.len(), 1);
	assert_eq!(report.scan_failures[0].side, TreeSide::Destination);
	assert_eq!(report.scan_failures[0].path, locked);
	assert_eq!(report.stats.errors, 1);
	assert_eq!(report.stats.copied, 1);
	assert_eq!(report.stats.total(), report.total);
	assert_eq!(read_file(dst.path(), "plain.txt"), Some("p".to_string()));
	assert_eq!(read_file(dst.path(), "locked/f.txt"), Some("old".to_string()));
}

#[cfg(unix)]
#[test]
fn test_fully_unreadable_source_is_not_nothing_to_sync() {
	use std::os::unix::fs::PermissionsExt;

	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "locked/only.txt", "o", T1);

	let locked = src.path().join("locked");
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
	if fs::read_dir(&locked).is_ok() {
		// Running with privileges that bypass permission bits
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
		return;
	}

	let report = sync(src.path(), dst.path());
	fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
	let report = report.unwrap();

	assert_eq!(report.total, 0);
	assert_eq!(report.scan_failures.len(), 1);
	assert_ne!(report.verdict(), Verdict::NothingToSync);
	assert!(report.summary().contains("Unreadable dirs  : 1"));
}

// ===================================================================
// DRY RUN
// ===================================================================

#[test]
fn test_dry_run_does_not_modify_destination() {
	let src = TempDir::new().unwrap();
	let dst = TempDir::new().unwrap();
	create_file(src.path(), "new.txt", "n", T1);
	create_file(src.path(), "sub/changed.txt", "v2", T2);
	create_file(dst.path(), "sub/changed.txt", "v1", T1);
	let before = listing(dst.path());

	let report = SyncBuilder::new()
		.source(src.path())
		.destination(dst.path())
		.dry_run(true)
		.sync()
		.unwrap();

	assert!(report.dry_run);
	assert_eq!(report.stats.copied, 1);
	assert_eq!(report.stats.updated, 1);
	assert_eq!(listing(dst.path()), before);
	assert_eq!(read_file(dst.path(), "sub/changed.txt"), Some("v1".to_string()));
}

#[test]
fn test_dry_run_with_missing_destination() {
	let src = TempDir::new().unwrap();
	let root = TempDir::new().unwrap();
	let dst = root.path().join("absent");
	create_file(src.path(), "a.txt", "A", T1);

	let report = SyncBuilder::new().source(src.path()).destination(&dst).dry_run(true).sync().unwrap();

	assert_eq!(report.stats.copied, 1);
	assert!(report.scan_failures.is_empty());
	assert!(!dst.exists());
}

// vim: ts=4
