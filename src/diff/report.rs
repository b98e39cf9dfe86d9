//! Collected verdicts and run statistics

use crate::types::Verdict;
use serde::Serialize;

/// Verdicts of a whole run, in emission order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiffReport {
    pub verdicts: Vec<Verdict>,
    pub stats: DiffStats,
}

impl DiffReport {
    /// No left-only, right-only or differing entries
    pub fn is_identical(&self) -> bool {
        self.verdicts.is_empty()
    }
}

/// Counters gathered while walking two trees
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiffStats {
    pub left_only: usize,
    pub right_only: usize,
    pub different: usize,

    /// Directory pairs listed (roots included)
    pub dirs_compared: usize,

    /// Common file pairs handed to the content comparator
    pub files_compared: usize,

    /// Bytes read from each side while comparing content
    pub bytes_compared: u64,
}

impl DiffStats {
    pub fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::LeftOnly { .. } => self.left_only += 1,
            Verdict::RightOnly { .. } => self.right_only += 1,
            Verdict::Different { .. } => self.different += 1,
        }
    }

    pub fn total_verdicts(&self) -> usize {
        self.left_only + self.right_only + self.different
    }

    pub fn has_differences(&self) -> bool {
        self.total_verdicts() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = DiffReport::default();
        assert!(report.is_identical());
        assert_eq!(report.stats.total_verdicts(), 0);
        assert!(!report.stats.has_differences());
    }

    #[test]
    fn test_record_counts_each_kind() {
        let mut stats = DiffStats::default();

        stats.record(&Verdict::left_only("/l/a"));
        stats.record(&Verdict::left_only("/l/b"));
        stats.record(&Verdict::right_only("/r/c"));
        stats.record(&Verdict::different("/l/d", "/r/d"));

        assert_eq!(stats.left_only, 2);
        assert_eq!(stats.right_only, 1);
        assert_eq!(stats.different, 1);
        assert_eq!(stats.total_verdicts(), 4);
        assert!(stats.has_differences());
    }

    #[test]
    fn test_comparisons_alone_are_not_differences() {
        let stats = DiffStats {
            dirs_compared: 3,
            files_compared: 10,
            bytes_compared: 4096,
            ..DiffStats::default()
        };
        assert!(!stats.has_differences());
    }
}
