//! # treesync - One-way directory tree synchronizer
//!
//! treesync walks a source and a destination tree, matches files by their
//! path relative to each root and propagates new or newer files from source
//! to destination. Change detection uses modification times only: a file is
//! updated when the source copy is strictly newer. Nothing is ever deleted
//! from the destination.
//!
//! Failures are isolated: an unreadable directory contributes no files, a
//! failing file is counted and skipped. Only a missing or invalid source
//! root, or an uncreatable destination root, aborts a run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let report = treesync::sync::sync("./source", "./backup")?;
//! println!("Copied {} files", report.stats.copied);
//! # Ok::<(), treesync::SyncError>(())
//! ```
//!
//! ## Using the Builder Pattern
//!
//! ```rust,no_run
//! use treesync::sync::SyncBuilder;
//!
//! let report = SyncBuilder::new()
//!     .source("./source")
//!     .destination("./backup")
//!     .dry_run(true)
//!     .sync()?;
//! assert_eq!(report.stats.total(), report.total);
//! # Ok::<(), treesync::SyncError>(())
//! ```

pub mod callbacks;
pub mod config;
pub mod error;
pub mod execute;
pub mod logging;
pub mod plan;
pub mod progress;
pub mod report;
pub mod scan;
pub mod sync;
pub mod types;
pub mod validation;

// Re-export commonly used types and functions
pub use config::SyncConfig;
pub use error::{FileError, FileStage, ScanFailure, SyncError};
pub use report::{SyncReport, SyncStats, Verdict};
pub use types::{Action, FileEntry, FileOutcome, SyncPlanItem, SyncPhase, TreeSide};

// vim: ts=4
