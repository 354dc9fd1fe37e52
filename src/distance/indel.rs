//! Indel distance
//!
//! Insertions and deletions only: `len1 + len2 - 2 * LCS`.

use super::normalize;
use crate::lcs_core::{char_len, lcs_fast};

/// Indel distance between two strings.
pub fn indel_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }
    char_len(s1) + char_len(s2) - 2 * lcs_fast(s1, s2)
}

/// `1 - distance / (len1 + len2)`; equals `fuzz::ratio / 100`.
pub fn indel_normalized_similarity(s1: &str, s2: &str) -> f64 {
    let total = char_len(s1) + char_len(s2);
    normalize(indel_distance(s1, s2), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indel_distance() {
        assert_eq!(indel_distance("kitten", "sitting"), 5);
        assert_eq!(indel_distance("abc", ""), 3);
        assert_eq!(indel_distance("abc", "abc"), 0);
    }

    #[test]
    fn test_indel_normalized() {
        let sim = indel_normalized_similarity("kitten", "sitting");
        assert!((sim - 8.0 / 13.0).abs() < 1e-9);
        assert!((indel_normalized_similarity("", "") - 1.0).abs() < 1e-9);
    }
}
