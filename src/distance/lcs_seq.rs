//! Longest common subsequence distance
//!
//! `max(len1, len2) - LCS`.

use super::normalize;
use crate::lcs_core::{char_len, lcs_fast};

/// LCSseq distance between two strings.
pub fn lcs_seq_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }
    char_len(s1).max(char_len(s2)) - lcs_fast(s1, s2)
}

/// `LCS / max(len1, len2)`.
pub fn lcs_seq_normalized_similarity(s1: &str, s2: &str) -> f64 {
    let max_len = char_len(s1).max(char_len(s2));
    normalize(lcs_seq_distance(s1, s2), max_len)
}
