//! Verdict formatting

use crate::config::OutputFormat;
use crate::diff::DiffStats;
use crate::types::Verdict;
use console::Style;
use indicatif::HumanBytes;
use std::io::{self, Write};

/// Writes verdicts and the optional summary to an output stream
pub struct Printer<W: Write> {
    out: W,
    format: OutputFormat,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, format: OutputFormat, color: bool) -> Self {
        Self { out, format, color }
    }

    pub fn print_verdict(&mut self, verdict: &Verdict) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let line = format_verdict(verdict);
                let styled = if self.color {
                    verdict_style(verdict).apply_to(line).to_string()
                } else {
                    line
                };
                writeln!(self.out, "{}", styled)
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, verdict)?;
                writeln!(self.out)
            }
        }
    }

    pub fn print_stats(&mut self, stats: &DiffStats) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", format_stats(stats)),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &serde_json::json!({ "summary": stats }))?;
                writeln!(self.out)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Plain-text rendering of one verdict
pub fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::LeftOnly { path } => format!("<-- {}", path.display()),
        Verdict::RightOnly { path } => format!("--> {}", path.display()),
        Verdict::Different { left, right } => {
            format!("{} <-> {}", left.display(), right.display())
        }
    }
}

/// Plain-text summary block
pub fn format_stats(stats: &DiffStats) -> String {
    format!(
        "Summary:\n  Left only: {}  Right only: {}  Different: {}\n  Compared {} directories, {} file pairs, {} read per side",
        stats.left_only,
        stats.right_only,
        stats.different,
        stats.dirs_compared,
        stats.files_compared,
        HumanBytes(stats.bytes_compared)
    )
}

fn verdict_style(verdict: &Verdict) -> Style {
    match verdict {
        Verdict::LeftOnly { .. } => Style::new().red(),
        Verdict::RightOnly { .. } => Style::new().green(),
        Verdict::Different { .. } => Style::new().yellow(),
    }
}
