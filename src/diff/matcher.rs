//! Name-keyed matching of one directory level

use crate::types::Named;
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;

/// Result of matching two entry lists by name
#[derive(Debug, PartialEq, Eq)]
pub struct MatchSet<'a, T> {
    /// Pairs present on both sides, in left enumeration order
    pub common: Vec<(&'a T, &'a T)>,

    /// Present only on the left, in left enumeration order
    pub left_only: Vec<&'a T>,

    /// Present only on the right, in right enumeration order
    pub right_only: Vec<&'a T>,
}

/// Match entries by exact, case-sensitive name equality
///
/// Runs in O(left + right) using a name index of each side. Names are
/// compared as raw OS strings, never through a lossy conversion.
pub fn match_by_name<'a, T: Named>(left: &'a [T], right: &'a [T]) -> MatchSet<'a, T> {
    let right_index: HashMap<&OsStr, &T> = right.iter().map(|e| (e.name(), e)).collect();
    let left_names: HashSet<&OsStr> = left.iter().map(|e| e.name()).collect();

    let mut common = Vec::new();
    let mut left_only = Vec::new();
    for entry in left {
        match right_index.get(entry.name()) {
            Some(other) => common.push((entry, *other)),
            None => left_only.push(entry),
        }
    }

    let right_only = right
        .iter()
        .filter(|e| !left_names.contains(e.name()))
        .collect();

    MatchSet {
        common,
        left_only,
        right_only,
    }
}
