//! Per-call options
//!
//! Hosts pass options as trailing flags (`nocase`, `pw=0.15`); Rust callers
//! build `MatchOptions` directly or deserialize it.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::distance::jaro_winkler::MAX_PREFIX_WEIGHT;
use crate::error::EngineError;

/// Default Jaro-Winkler prefix weight.
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Minimum number of rows (pairwise) or master records (match) before work
/// is spread across the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Lowercase every string once before scoring.
    pub case_fold: bool,
    /// Jaro-Winkler prefix weight; ignored by every other metric.
    pub prefix_weight: f64,
    /// Allow rayon fan-out for inputs at or above `PARALLEL_THRESHOLD`.
    pub parallel: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_fold: false,
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            parallel: true,
        }
    }
}

impl MatchOptions {
    /// Parse trailing host flags. Unknown flags are ignored; a `pw=` value
    /// that is not a number is rejected.
    pub fn from_flags<S: AsRef<str>>(flags: &[S]) -> Result<Self, EngineError> {
        let mut options = MatchOptions::default();

        for flag in flags {
            let flag = flag.as_ref();
            if flag == "nocase" {
                options.case_fold = true;
            } else if let Some(value) = flag.strip_prefix("pw=") {
                options.prefix_weight =
                    value
                        .trim()
                        .parse()
                        .map_err(|_| EngineError::InvalidArgument {
                            name: "prefix weight",
                            value: value.to_string(),
                        })?;
            } else {
                warn!(flag, "ignoring unrecognised option");
            }
        }

        if !options.prefix_weight_in_range() {
            warn!(
                prefix_weight = options.prefix_weight,
                "prefix weight outside [0, 0.25]; jaro_winkler scores will be missing"
            );
        }
        Ok(options)
    }

    /// Whether Jaro-Winkler can score with this prefix weight. Other metrics
    /// never read it.
    pub fn prefix_weight_in_range(&self) -> bool {
        (0.0..=MAX_PREFIX_WEIGHT).contains(&self.prefix_weight)
    }

    /// Whether a batch of `len` independent items should run on rayon.
    pub(crate) fn fan_out(&self, len: usize) -> bool {
        self.parallel && len >= PARALLEL_THRESHOLD
    }
}
