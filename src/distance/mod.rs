//! Edit-distance and normalized-similarity algorithms
//!
//! Pure functions over `&str`. Lengths are counted in chars; ASCII input
//! takes a byte-level fast path. Normalized similarities are in `[0, 1]`.

use smallvec::SmallVec;
use thiserror::Error;

pub mod hamming;
pub mod indel;
pub mod jaro;
pub mod jaro_winkler;
pub mod lcs_seq;
pub mod levenshtein;
pub mod osa;

pub use hamming::{hamming_distance, hamming_normalized_similarity};
pub use indel::{indel_distance, indel_normalized_similarity};
pub use jaro::jaro_similarity;
pub use jaro_winkler::jaro_winkler_similarity;
pub use lcs_seq::{lcs_seq_distance, lcs_seq_normalized_similarity};
pub use levenshtein::{levenshtein_distance, levenshtein_normalized_similarity};
pub use osa::{osa_distance, osa_normalized_similarity};

pub(crate) type CharVec = SmallVec<[char; 64]>;

/// Failures raised by algorithms that constrain their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DistanceError {
    #[error("strings must have equal length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Jaro-Winkler weight out of range. Hosts accept any numeric weight, so
    /// this is how an out-of-range one reaches the output: every
    /// `jaro_winkler` row becomes a missing score.
    #[error("prefix weight must be in [0, 0.25], got {0}")]
    PrefixWeight(f64),
}

/// `1 - dist / max_len`, treating two empty strings as identical.
#[inline(always)]
pub(crate) fn normalize(dist: usize, max_len: usize) -> f64 {
    if max_len == 0 {
        return 1.0;
    }
    1.0 - dist as f64 / max_len as f64
}
