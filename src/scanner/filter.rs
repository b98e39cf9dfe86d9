//! Name-based exclusion

use crate::types::DirDiffError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Glob patterns matched against entry names (not full paths)
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    set: GlobSet,
}

impl ExcludeFilter {
    /// Compile exclude patterns
    ///
    /// # Errors
    /// Returns `DirDiffError::Config` naming the first invalid pattern.
    pub fn new(patterns: &[String]) -> Result<Self, DirDiffError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                DirDiffError::Config(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|e| DirDiffError::Config(format!("Failed to build exclude set: {}", e)))?;

        Ok(Self { set })
    }

    /// Filter that excludes nothing
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    /// Match a raw entry name as returned by the OS
    pub fn is_excluded(&self, name: impl AsRef<Path>) -> bool {
        !self.set.is_empty() && self.set.is_match(name)
    }
}
