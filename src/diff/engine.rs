//! Tree differ - walks two directory trees in lock-step

use super::matcher::match_by_name;
use super::report::{DiffReport, DiffStats};
use crate::compare::{compare_files, Comparison, SamplingPolicy};
use crate::scanner::{list_directory, ExcludeFilter};
use crate::types::{DirDiffError, FileEntry, Verdict};
use crate::Config;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// Callback invoked with the left-side path of each directory pair entered
pub type ProgressCallback = Box<dyn Fn(&Path) + Send + Sync>;

/// Recursive comparison of two directory trees
///
/// Traversal is depth-first and sequential across directories: at each
/// level, exclusive subdirectories are reported, common subdirectories are
/// recursed into in left order, and only then are the files of that level
/// matched and compared. File comparison is synchronous from the walker's
/// point of view; the engine blocks on its own runtime for each pair.
pub struct DiffEngine {
    runtime: Runtime,
    policy: SamplingPolicy,
    filter: ExcludeFilter,
    jobs: usize,
}

/// Per-run mutable state threaded through the recursion
struct Walk<'s, 'p> {
    sink: &'s mut dyn FnMut(Verdict) -> ControlFlow<()>,
    on_progress: Option<&'p ProgressCallback>,
    stats: DiffStats,
    stopped: bool,
}

impl Walk<'_, '_> {
    /// Deliver a verdict; once the sink breaks, nothing more is delivered
    fn emit(&mut self, verdict: Verdict) {
        if self.stopped {
            return;
        }
        self.stats.record(&verdict);
        if (self.sink)(verdict).is_break() {
            debug!("Verdict sink stopped the walk");
            self.stopped = true;
        }
    }

    fn record_comparison(&mut self, left: &FileEntry, right: &FileEntry, result: Comparison) {
        self.stats.files_compared += 1;
        self.stats.bytes_compared += result.bytes_read;

        debug!(
            left = %left.path.display(),
            size = left.size,
            tier = ?result.tier,
            bytes_read = result.bytes_read,
            equal = result.equal,
            "compared file pair"
        );

        if !result.equal {
            self.emit(Verdict::different(left.path.clone(), right.path.clone()));
        }
    }
}

impl DiffEngine {
    /// Build an engine from configuration
    ///
    /// A single-threaded runtime is used for sequential comparison; with
    /// `jobs > 1` a multi-threaded runtime with `jobs` workers is built.
    pub fn new(config: &Config) -> Result<Self, DirDiffError> {
        let jobs = config.jobs.max(1);
        let runtime = if jobs == 1 {
            Builder::new_current_thread().enable_all().build()
        } else {
            Builder::new_multi_thread()
                .worker_threads(jobs)
                .enable_all()
                .build()
        }
        .map_err(DirDiffError::Io)?;

        Ok(Self {
            runtime,
            policy: config.sampling_policy(),
            filter: ExcludeFilter::new(&config.exclude_patterns)?,
            jobs,
        })
    }

    /// Compare `left` and `right`, streaming each verdict to `on_verdict`
    ///
    /// Returning `ControlFlow::Break` from `on_verdict` ends the walk without
    /// listing or reading anything further; the stats cover the work done so
    /// far. Must be called from synchronous code: the engine blocks on its own
    /// runtime.
    ///
    /// # Errors
    /// Any listing or read failure aborts the walk. Verdicts already passed
    /// to `on_verdict` stay delivered; no verdict is produced for a file
    /// pair that could not be read. Calling from inside an async runtime
    /// returns `DirDiffError::Task` before anything is read.
    pub fn run(
        &self,
        left: &Path,
        right: &Path,
        on_verdict: &mut dyn FnMut(Verdict) -> ControlFlow<()>,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<DiffStats, DirDiffError> {
        if Handle::try_current().is_ok() {
            return Err(DirDiffError::Task(
                "DiffEngine::run cannot be called from within an async runtime".to_string(),
            ));
        }

        let start_time = Instant::now();
        info!("Comparing {} with {}", left.display(), right.display());

        let mut walk = Walk {
            sink: on_verdict,
            on_progress,
            stats: DiffStats::default(),
            stopped: false,
        };
        self.diff_level(left, right, &mut walk)?;

        info!(
            "Compared {} directories and {} file pairs in {:?}: {} left-only, {} right-only, {} different",
            walk.stats.dirs_compared,
            walk.stats.files_compared,
            start_time.elapsed(),
            walk.stats.left_only,
            walk.stats.right_only,
            walk.stats.different
        );
        Ok(walk.stats)
    }

    /// Compare `left` and `right`, collecting every verdict
    pub fn collect(&self, left: &Path, right: &Path) -> Result<DiffReport, DirDiffError> {
        let mut verdicts = Vec::new();
        let stats = self.run(
            left,
            right,
            &mut |verdict| {
                verdicts.push(verdict);
                ControlFlow::Continue(())
            },
            None,
        )?;
        Ok(DiffReport { verdicts, stats })
    }

    fn diff_level(
        &self,
        left: &Path,
        right: &Path,
        walk: &mut Walk<'_, '_>,
    ) -> Result<(), DirDiffError> {
        if let Some(callback) = walk.on_progress {
            callback(left);
        }

        let left_listing = list_directory(left, &self.filter)?;
        let right_listing = list_directory(right, &self.filter)?;
        walk.stats.dirs_compared += 1;

        debug!(
            "Level {}: {} dirs / {} files left, {} dirs / {} files right",
            left.display(),
            left_listing.dirs.len(),
            left_listing.files.len(),
            right_listing.dirs.len(),
            right_listing.files.len()
        );

        // Missing subtrees are reported once, at their root
        let dirs = match_by_name(&left_listing.dirs, &right_listing.dirs);
        for dir in dirs.left_only {
            walk.emit(Verdict::left_only(dir.path.clone()));
        }
        for dir in dirs.right_only {
            walk.emit(Verdict::right_only(dir.path.clone()));
        }
        for (left_dir, right_dir) in dirs.common {
            if walk.stopped {
                return Ok(());
            }
            self.diff_level(&left_dir.path, &right_dir.path, walk)?;
        }

        let files = match_by_name(&left_listing.files, &right_listing.files);
        for file in files.left_only {
            walk.emit(Verdict::left_only(file.path.clone()));
        }
        for file in files.right_only {
            walk.emit(Verdict::right_only(file.path.clone()));
        }
        if walk.stopped {
            return Ok(());
        }

        if self.jobs > 1 && files.common.len() > 1 {
            self.compare_concurrently(&files.common, walk)
        } else {
            for &(left_file, right_file) in &files.common {
                if walk.stopped {
                    break;
                }
                let result = self
                    .runtime
                    .block_on(compare_files(left_file, right_file, &self.policy))?;
                walk.record_comparison(left_file, right_file, result);
            }
            Ok(())
        }
    }

    /// Compare one level's file pairs with at most `jobs` in flight
    ///
    /// Results are consumed in left enumeration order, so verdicts come out
    /// exactly as the sequential walk would emit them.
    fn compare_concurrently(
        &self,
        pairs: &[(&FileEntry, &FileEntry)],
        walk: &mut Walk<'_, '_>,
    ) -> Result<(), DirDiffError> {
        let semaphore = Arc::new(Semaphore::new(self.jobs));

        let handles: Vec<_> = pairs
            .iter()
            .map(|&(left_file, right_file)| {
                let left_file = left_file.clone();
                let right_file = right_file.clone();
                let policy = self.policy;
                let semaphore = Arc::clone(&semaphore);
                self.runtime.spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|e| DirDiffError::Task(e.to_string()))?;
                    compare_files(&left_file, &right_file, &policy).await
                })
            })
            .collect();

        let results = self.runtime.block_on(async move {
            let mut results = Vec::with_capacity(handles.len());
            for handle in handles {
                results.push(handle.await);
            }
            results
        });

        for (&(left_file, right_file), joined) in pairs.iter().zip(results) {
            if walk.stopped {
                break;
            }
            let result = joined.map_err(|e| DirDiffError::Task(e.to_string()))??;
            walk.record_comparison(left_file, right_file, result);
        }
        Ok(())
    }
}
