//! Presentation - verdict output and progress display

mod printer;
mod progress;

pub use printer::{format_stats, format_verdict, Printer};
pub use progress::ProgressReporter;
