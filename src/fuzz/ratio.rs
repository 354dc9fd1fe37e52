//! Ratio
//!
//! Normalized Indel similarity scaled to 100: `100 * 2 * LCS / (len1 + len2)`.

use crate::lcs_core::{char_len, lcs_fast, ratio_from_lcs};

/// Ratio of two strings; two empty strings score 100.
pub fn ratio(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 100.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    ratio_from_lcs(char_len(s1), char_len(s2), lcs_fast(s1, s2))
}
