//! Diff engine - name matching, tree walk and collected results

mod engine;
mod matcher;
mod report;

pub use engine::{DiffEngine, ProgressCallback};
pub use matcher::{match_by_name, MatchSet};
pub use report::{DiffReport, DiffStats};
