//! List-level diffing with fuzzy modification pairing.
//!
//! Matching is greedy first-fit in encounter order: deterministic and
//! linear-ish in practice, not a globally optimal assignment. Callers may not
//! rely on which of several eligible candidates gets paired, only on the
//! tie-break being target-list order.

use std::collections::HashSet;

use crate::diff::result::{DomainDiff, ModifiedEntry};
use crate::distance::{are_similar, DEFAULT_SIMILARITY_THRESHOLD};

/// Diff two string lists with the default similarity threshold.
pub fn diff_lists(source: &[String], target: &[String]) -> DomainDiff {
    diff_lists_with_threshold(source, target, DEFAULT_SIMILARITY_THRESHOLD)
}

/// Diff two string lists, pairing near matches at `threshold`.
///
/// Exact matches are dropped from the result. Each remaining source value is
/// paired with the first unconsumed target value that is not itself an exact
/// match and satisfies the similarity threshold; a target value is consumed by
/// at most one pair. Unpaired source values become `added`, unconsumed target
/// values become `removed`.
pub fn diff_lists_with_threshold(
    source: &[String],
    target: &[String],
    threshold: f64,
) -> DomainDiff {
    let target_set: HashSet<&str> = target.iter().map(String::as_str).collect();
    let source_set: HashSet<&str> = source.iter().map(String::as_str).collect();

    let mut consumed = vec![false; target.len()];
    let mut added = Vec::new();
    let mut modified = Vec::new();

    for value in source {
        if target_set.contains(value.as_str()) {
            continue;
        }
        let candidate = target.iter().enumerate().find(|(idx, candidate)| {
            !consumed[*idx]
                && !source_set.contains(candidate.as_str())
                && are_similar(value, candidate, threshold)
        });
        match candidate {
            Some((idx, old)) => {
                consumed[idx] = true;
                modified.push(ModifiedEntry {
                    old: old.clone(),
                    new: value.clone(),
                });
            }
            None => added.push(value.clone()),
        }
    }

    let removed = target
        .iter()
        .enumerate()
        .filter(|(idx, value)| !consumed[*idx] && !source_set.contains(value.as_str()))
        .map(|(_, value)| value.clone())
        .collect();

    DomainDiff {
        added,
        removed,
        modified,
    }
}
