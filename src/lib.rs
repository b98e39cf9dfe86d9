//! # dirdiff - Directory Tree Comparison
//!
//! Quick look at how two directory trees differ.
//!
//! Walks both trees in lock-step, matching entries by name, and reports
//! every path that exists on only one side or whose content differs.
//! Large files are compared by sampling fixed-size blocks at a stride that
//! grows with the file size, always including the final block.

// Module declarations
pub mod commands;
pub mod compare;
pub mod config;
pub mod diff;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use diff::{DiffEngine, DiffReport, DiffStats};
pub use types::{DirDiffError, DirEntry, FileEntry, Verdict};
