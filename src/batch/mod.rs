//! Batch executors
//!
//! `pairwise` scores row-aligned pairs; `best_match` scans a reference set for
//! every master record. Both fold case once per string, never per pair.

use std::borrow::Cow;

use crate::scorer::fold_case;

pub mod best_match;
pub mod pairwise;

pub use best_match::{best_match, run_match, MatchResult};
pub use pairwise::run_pairwise;

/// Fold every string of a collection once, up front.
pub(crate) fn fold_all<S: AsRef<str>>(strings: &[S], case_fold: bool) -> Vec<Cow<'_, str>> {
    strings
        .iter()
        .map(|s| fold_case(s.as_ref(), case_fold))
        .collect()
}
