//! Best-match search
//!
//! Exhaustive scan: every master record is scored against every reference
//! record. The first reference reaching the best value wins ties, and missing
//! scores never take part in the comparison.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Mutex;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use super::fold_all;
use crate::metric::Metric;
use crate::options::MatchOptions;
use crate::scorer::score;

/// Best reference for one master record.
///
/// Both fields are `None` when no comparison produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    pub score: Option<f64>,
    /// 1-based position in the reference collection.
    pub index: Option<usize>,
}

impl MatchResult {
    pub const NO_MATCH: MatchResult = MatchResult {
        score: None,
        index: None,
    };

    pub fn is_match(&self) -> bool {
        self.index.is_some()
    }
}

/// Scan `reference` for the best counterpart of `query`.
///
/// Strings are compared as given; callers fold case beforehand.
pub fn best_match<R: AsRef<str>>(
    query: &str,
    reference: &[R],
    metric: Metric,
    prefix_weight: f64,
) -> MatchResult {
    let direction = metric.direction();
    let mut best: Option<(f64, usize)> = None;

    for (j, candidate) in reference.iter().enumerate() {
        let Ok(value) = score(query, candidate.as_ref(), metric, prefix_weight) else {
            continue;
        };
        match best {
            Some((incumbent, _)) if !direction.improves(value, incumbent) => {}
            _ => best = Some((value, j)),
        }
    }

    match best {
        Some((value, j)) => MatchResult {
            score: Some(value),
            index: Some(j + 1),
        },
        None => MatchResult::NO_MATCH,
    }
}

/// Serializes progress callbacks across workers.
///
/// The counter and the callback share one lock, so reported counts are
/// strictly increasing whatever order records finish in.
struct Progress<F> {
    total: usize,
    every: usize,
    state: Mutex<(usize, F)>,
}

impl<F: FnMut(usize, usize)> Progress<F> {
    fn new(total: usize, callback: F) -> Self {
        Self {
            total,
            every: (total / 10).max(1),
            state: Mutex::new((0, callback)),
        }
    }

    fn record_done(&self) {
        let mut guard = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let (done, callback) = &mut *guard;
        *done += 1;
        if *done % self.every != 0 {
            return;
        }

        let (done, total) = (*done, self.total);
        // A failing observer must not cost the scan its results
        if catch_unwind(AssertUnwindSafe(|| callback(done, total))).is_err() {
            warn!(done, total, "progress callback panicked");
        }
    }
}

/// Find the best reference record for every master record.
///
/// `on_progress(done, total)` fires after every `max(1, total / 10)` master
/// records. An empty reference set yields `MatchResult::NO_MATCH` throughout.
pub fn run_match<M, R, F>(
    master: &[M],
    reference: &[R],
    metric: Metric,
    options: &MatchOptions,
    on_progress: F,
) -> Vec<MatchResult>
where
    M: AsRef<str> + Sync,
    R: AsRef<str> + Sync,
    F: FnMut(usize, usize) + Send,
{
    let parallel = options.fan_out(master.len());
    debug!(
        %metric,
        n_master = master.len(),
        n_ref = reference.len(),
        parallel,
        case_fold = options.case_fold,
        "running best-match search"
    );

    let master = fold_all(master, options.case_fold);
    let reference = fold_all(reference, options.case_fold);
    let pw = options.prefix_weight;
    let progress = Progress::new(master.len(), on_progress);

    let scan = |query: &str| {
        let result = best_match(query, &reference, metric, pw);
        progress.record_done();
        result
    };

    let results: Vec<MatchResult> = if parallel {
        master.par_iter().map(|q| scan(q)).collect()
    } else {
        master.iter().map(|q| scan(q)).collect()
    };

    let unmatched = results.iter().filter(|r| !r.is_match()).count();
    if unmatched > 0 && !reference.is_empty() {
        warn!(unmatched, %metric, "master records without any scorable reference");
    }
    results
}
