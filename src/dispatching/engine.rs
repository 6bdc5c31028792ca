//! Candidate selection with an explicit tie-break.

use std::cmp::Ordering;

use super::SelectionRule;
use crate::models::{ProcessRecord, Tick};

/// How equal scores are ordered.
///
/// Only one strategy exists: the process defined earliest in the input
/// wins. It is spelled out as a type so the rule is stated rather than
/// left to loop order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Lowest original input index first.
    #[default]
    InputOrder,
}

impl TieBreak {
    /// Orders two candidate indices with equal scores.
    pub fn compare(self, a: usize, b: usize) -> Ordering {
        match self {
            TieBreak::InputOrder => a.cmp(&b),
        }
    }
}

/// Returns the index of the best ready process at `clock`.
///
/// A record is a candidate when it has arrived and is not complete.
/// The lowest score wins; equal scores fall back to [`TieBreak::InputOrder`].
/// Returns `None` if nothing is ready.
pub fn select_best<R: SelectionRule + ?Sized>(
    rule: &R,
    records: &[ProcessRecord],
    clock: Tick,
) -> Option<usize> {
    let tie_break = TieBreak::default();

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_ready(clock))
        .map(|(i, r)| (i, rule.score(r, clock)))
        .min_by(|(ia, sa), (ib, sb)| sa.total_cmp(sb).then_with(|| tie_break.compare(*ia, *ib)))
        .map(|(i, _)| i)
}
