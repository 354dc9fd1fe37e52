//! fuzzlink - string similarity scoring and best-match record linkage
//!
//! A closed catalog of RapidFuzz-style metrics behind one `score` function,
//! and two batch executors over it: row-aligned pairwise scoring and an
//! exhaustive best-match search of a reference set for every master record.
//!
//! ```
//! use fuzzlink::{run_match, MatchOptions, Metric};
//!
//! let results = run_match(
//!     &["apple"],
//!     &["aple", "banana"],
//!     Metric::Ratio,
//!     &MatchOptions::default(),
//!     |_, _| {},
//! );
//! assert_eq!(results[0].index, Some(1));
//! ```
//!
//! Hosts that exchange tabular data drive the engine through `plugin::call`.

pub mod batch;
pub mod distance;
pub mod error;
pub mod fuzz;
pub mod host;
pub mod metric;
pub mod options;
pub mod plugin;
pub mod scorer;

mod lcs_core;

#[cfg(feature = "python")]
mod python;

pub use batch::{best_match, run_match, run_pairwise, MatchResult};
pub use error::{EngineError, INTERNAL_FAULT, SUCCESS, USAGE_ERROR};
pub use host::{Dataset, Diagnostics, MemoryTable, TracingDiagnostics};
pub use metric::{Direction, Metric, OutputKind};
pub use options::MatchOptions;
pub use scorer::{score, MissingScore, Score};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn fuzzlink(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)
}
