//! Python bindings
//!
//! Mirrors the two plugin modes over Python lists. Missing scores come back
//! as `None`; call-level failures raise `UsageError` or `InternalError`.

use pyo3::create_exception;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use tracing::info;

use crate::batch::{run_match, run_pairwise};
use crate::error::{EngineError, INTERNAL_FAULT};
use crate::metric::Metric;
use crate::options::{MatchOptions, DEFAULT_PREFIX_WEIGHT};
use crate::scorer;

create_exception!(fuzzlink, UsageError, PyException);
create_exception!(fuzzlink, InternalError, PyException);

fn to_py_err(e: EngineError) -> PyErr {
    match e.return_code() {
        INTERNAL_FAULT => InternalError::new_err(e.to_string()),
        _ => UsageError::new_err(e.to_string()),
    }
}

fn options(nocase: bool, prefix_weight: f64) -> MatchOptions {
    MatchOptions {
        case_fold: nocase,
        prefix_weight,
        ..MatchOptions::default()
    }
}

/// Score a single pair. Returns `None` when the metric has no value for it.
#[pyfunction]
#[pyo3(signature = (s1, s2, method, nocase = false, prefix_weight = DEFAULT_PREFIX_WEIGHT))]
fn score(s1: &str, s2: &str, method: &str, nocase: bool, prefix_weight: f64) -> PyResult<Option<f64>> {
    let metric = Metric::resolve(method).map_err(to_py_err)?;
    let options = options(nocase, prefix_weight);
    let s1 = scorer::fold_case(s1, options.case_fold);
    let s2 = scorer::fold_case(s2, options.case_fold);
    Ok(scorer::score(&s1, &s2, metric, options.prefix_weight).ok())
}

#[pyfunction]
#[pyo3(signature = (strings1, strings2, method, nocase = false, prefix_weight = DEFAULT_PREFIX_WEIGHT))]
fn pairwise(
    py: Python<'_>,
    strings1: Vec<String>,
    strings2: Vec<String>,
    method: &str,
    nocase: bool,
    prefix_weight: f64,
) -> PyResult<Vec<Option<f64>>> {
    let metric = Metric::resolve(method).map_err(to_py_err)?;
    let options = options(nocase, prefix_weight);
    let scores = py
        .allow_threads(|| run_pairwise(&strings1, &strings2, metric, &options))
        .map_err(to_py_err)?;
    Ok(scores.into_iter().map(Result::ok).collect())
}

/// Best reference for each master string as `(score, 1-based index)`.
#[pyfunction]
#[pyo3(signature = (master, reference, method, nocase = false, prefix_weight = DEFAULT_PREFIX_WEIGHT))]
fn match_best(
    py: Python<'_>,
    master: Vec<String>,
    reference: Vec<String>,
    method: &str,
    nocase: bool,
    prefix_weight: f64,
) -> PyResult<Vec<(Option<f64>, Option<usize>)>> {
    let metric = Metric::resolve(method).map_err(to_py_err)?;
    let options = options(nocase, prefix_weight);
    let results = py.allow_threads(|| {
        run_match(&master, &reference, metric, &options, |done, total| {
            info!("matched {} of {}", done, total)
        })
    });
    Ok(results.into_iter().map(|r| (r.score, r.index)).collect())
}

/// Every method name accepted by `score`, `pairwise` and `match_best`.
#[pyfunction]
fn methods() -> Vec<&'static str> {
    Metric::all().map(Metric::name).collect()
}

pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(score, m)?)?;
    m.add_function(wrap_pyfunction!(pairwise, m)?)?;
    m.add_function(wrap_pyfunction!(match_best, m)?)?;
    m.add_function(wrap_pyfunction!(methods, m)?)?;
    m.add("UsageError", m.py().get_type_bound::<UsageError>())?;
    m.add("InternalError", m.py().get_type_bound::<InternalError>())?;
    Ok(())
}
