//! Configuration management

use crate::compare::{SamplingPolicy, DEFAULT_BLOCK_SIZE};
use crate::scanner::ExcludeFilter;
use crate::types::DirDiffError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compare two directory trees
#[derive(Debug, Parser)]
#[command(name = "dirdiff", version, about, long_about = None)]
pub struct Cli {
    /// Left directory
    pub left: PathBuf,

    /// Right directory
    pub right: PathBuf,

    /// Read every byte of every common file instead of sampling large files
    #[arg(long)]
    pub full: bool,

    /// Sampling block size (bytes, or with K/M/G suffix)
    #[arg(long, value_name = "SIZE", value_parser = parse_size, default_value = "16M")]
    pub block_size: u64,

    /// Number of file pairs compared concurrently within one directory
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Skip entries whose name matches this glob (repeatable)
    #[arg(short, long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Disable ANSI colors in output
    #[arg(long)]
    pub no_color: bool,

    /// Print a summary after the verdicts
    #[arg(long)]
    pub stats: bool,

    /// Show a progress spinner on stderr
    #[arg(long)]
    pub progress: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How verdicts are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `<-- left-only`, `--> right-only`, `left <-> right`
    #[default]
    Text,

    /// One JSON object per line
    Json,
}

/// Global configuration for dirdiff
#[derive(Debug, Clone)]
pub struct Config {
    /// Left root directory
    pub left: PathBuf,

    /// Right root directory
    pub right: PathBuf,

    /// Sampling unit in bytes
    pub block_size: u64,

    /// Force full-content comparison
    pub full_compare: bool,

    /// Concurrent file comparisons per directory level
    pub jobs: usize,

    /// Exclude patterns (globs on entry names)
    pub exclude_patterns: Vec<String>,

    /// Output format
    pub format: OutputFormat,

    /// Colorize text output
    pub color: bool,

    /// Print summary statistics
    pub show_stats: bool,

    /// Show progress spinner
    pub progress: bool,

    /// Log verbosity (0 = warnings only)
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left: PathBuf::new(),
            right: PathBuf::new(),
            block_size: DEFAULT_BLOCK_SIZE,
            full_compare: false,
            jobs: 1,
            exclude_patterns: Vec::new(),
            format: OutputFormat::Text,
            color: true,
            show_stats: false,
            progress: false,
            verbose: 0,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), DirDiffError> {
        for (label, path) in [("Left", &self.left), ("Right", &self.right)] {
            if !path.exists() {
                return Err(DirDiffError::Config(format!(
                    "{} path does not exist: {:?}",
                    label, path
                )));
            }
            if !path.is_dir() {
                return Err(DirDiffError::Config(format!(
                    "{} path is not a directory: {:?}",
                    label, path
                )));
            }
        }

        if self.block_size == 0 {
            return Err(DirDiffError::Validation(
                "Block size must be greater than zero".to_string(),
            ));
        }

        if self.jobs == 0 {
            return Err(DirDiffError::Validation(
                "Jobs must be at least 1".to_string(),
            ));
        }

        ExcludeFilter::new(&self.exclude_patterns)?;
        Ok(())
    }

    /// Sampling policy derived from block size and `--full`
    pub fn sampling_policy(&self) -> SamplingPolicy {
        SamplingPolicy::with_block_size(self.block_size).force_full(self.full_compare)
    }
}

impl TryFrom<Cli> for Config {
    type Error = DirDiffError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let format = if cli.json {
            OutputFormat::Json
        } else {
            cli.format
        };

        let config = Config {
            left: cli.left,
            right: cli.right,
            block_size: cli.block_size,
            full_compare: cli.full,
            jobs: cli.jobs,
            exclude_patterns: cli.exclude,
            format,
            color: !cli.no_color,
            show_stats: cli.stats,
            progress: cli.progress,
            verbose: cli.verbose,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Parse `4096`, `64K`, `16M`, `1G` (binary multiples, optional `iB`/`B`)
pub fn parse_size(value: &str) -> Result<u64, String> {
    let trimmed = value.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(digits_end);

    let number: u64 = digits
        .parse()
        .map_err(|_| format!("invalid size '{}'", value))?;

    let multiplier: u64 = match suffix.to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" | "KIB" => 1024,
        "M" | "MB" | "MIB" => 1024 * 1024,
        "G" | "GB" | "GIB" => 1024 * 1024 * 1024,
        other => return Err(format!("unknown size suffix '{}'", other)),
    };

    number
        .checked_mul(multiplier)
        .ok_or_else(|| format!("size '{}' is too large", value))
}
