//! Main diff command

use crate::diff::{DiffEngine, DiffStats, ProgressCallback};
use crate::types::DirDiffError;
use crate::ui::{Printer, ProgressReporter};
use crate::Config;
use std::io::{self, ErrorKind, Write};
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Arc;

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    pub stats: DiffStats,
}

impl DiffOutcome {
    /// Process exit status: 0 when the trees match, 1 when anything differs
    pub fn exit_code(&self) -> u8 {
        if self.stats.has_differences() {
            1
        } else {
            0
        }
    }
}

/// Exit status for a run aborted by an error
pub const ERROR_EXIT_CODE: u8 = 2;

/// Run the diff, writing verdicts to stdout
pub fn run(config: &Config) -> Result<DiffOutcome, DirDiffError> {
    let stdout = io::stdout();
    run_with_writer(config, stdout.lock())
}

/// Run the diff, writing verdicts to `out`
pub fn run_with_writer<W: Write>(config: &Config, out: W) -> Result<DiffOutcome, DirDiffError> {
    let engine = DiffEngine::new(config)?;
    let reporter = Arc::new(ProgressReporter::new(config.progress));
    let mut printer = Printer::new(out, config.format, config.color);

    let on_progress: Option<ProgressCallback> = if config.progress {
        let reporter = Arc::clone(&reporter);
        Some(Box::new(move |path: &Path| reporter.enter_directory(path)))
    } else {
        None
    };

    // A failed write (closed pipe, full disk) stops the walk
    let mut write_error: Option<io::Error> = None;
    let result = engine.run(
        &config.left,
        &config.right,
        &mut |verdict| match reporter.suspend(|| printer.print_verdict(&verdict)) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        },
        on_progress.as_ref(),
    );

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            reporter.abandon();
            return Err(e);
        }
    };
    reporter.finish(&stats);

    if let Some(e) = write_error {
        return Err(DirDiffError::Io(e));
    }
    if config.show_stats {
        printer.print_stats(&stats)?;
    }
    printer.flush()?;

    Ok(DiffOutcome { stats })
}

/// Human-readable error with an optional suggestion line
pub fn format_error(error: &DirDiffError) -> String {
    let (message, suggestion) = humanize_error(error);
    match suggestion {
        Some(suggestion) => format!("Error: {}\n  Try: {}", message, suggestion),
        None => format!("Error: {}", message),
    }
}

fn humanize_error(error: &DirDiffError) -> (String, Option<String>) {
    match error {
        DirDiffError::NotFound { path } => (
            format!("{} was not found", path.display()),
            Some("Verify the path still exists and retry.".to_string()),
        ),
        DirDiffError::PermissionDenied { path } => (
            format!("Permission denied while accessing {}", path.display()),
            Some("Check permissions or run with a user that has access.".to_string()),
        ),
        DirDiffError::ListDirectory { path, source } => (
            format!("Could not list {}: {}", path.display(), source),
            None,
        ),
        DirDiffError::ReadFile { path, source } => match source.kind() {
            ErrorKind::UnexpectedEof => (
                format!("{} changed size while being compared", path.display()),
                Some("Retry once the tree is no longer being modified.".to_string()),
            ),
            _ => (format!("Could not read {}: {}", path.display(), source), None),
        },
        DirDiffError::Io(io) => match io.kind() {
            ErrorKind::BrokenPipe => ("Output stream was closed".to_string(), None),
            _ => (
                format!("I/O operation failed: {}", io),
                Some("Check disk health and permissions, then retry.".to_string()),
            ),
        },
        DirDiffError::Config(msg) | DirDiffError::Validation(msg) => (
            msg.clone(),
            Some("Run with --help to see valid options.".to_string()),
        ),
        DirDiffError::Task(msg) => (format!("Comparison task failed: {}", msg), None),
    }
}
