//! Verdict - Per-path classification emitted by the tree differ

use serde::Serialize;
use std::path::PathBuf;

/// Classification of one non-matching entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Exists only on the left side (directory roots are reported once)
    LeftOnly { path: PathBuf },

    /// Exists only on the right side
    RightOnly { path: PathBuf },

    /// File exists on both sides with different content
    Different { left: PathBuf, right: PathBuf },
}

impl Verdict {
    pub fn left_only(path: impl Into<PathBuf>) -> Self {
        Verdict::LeftOnly { path: path.into() }
    }

    pub fn right_only(path: impl Into<PathBuf>) -> Self {
        Verdict::RightOnly { path: path.into() }
    }

    pub fn different(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Verdict::Different {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn is_left_only(&self) -> bool {
        matches!(self, Verdict::LeftOnly { .. })
    }

    pub fn is_right_only(&self) -> bool {
        matches!(self, Verdict::RightOnly { .. })
    }
}
