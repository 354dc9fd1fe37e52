//! Partial ratio
//!
//! Best ratio of the shorter string against every same-length window of the
//! longer string, plus the shrinking windows anchored at either end.

use crate::lcs_core::{lcs_bytes, lcs_chars, ratio_from_lcs};

fn best_window<T: PartialEq>(shorter: &[T], longer: &[T], lcs: fn(&[T], &[T]) -> usize) -> f64 {
    let short_len = shorter.len();
    let long_len = longer.len();
    let score = |window: &[T]| ratio_from_lcs(short_len, window.len(), lcs(shorter, window));

    let mut best = 0.0f64;

    // Windows cut off by the start of the longer string
    for end in 1..short_len {
        best = best.max(score(&longer[..end]));
        if best >= 100.0 {
            return best;
        }
    }

    for start in 0..=(long_len - short_len) {
        best = best.max(score(&longer[start..start + short_len]));
        if best >= 100.0 {
            return best;
        }
    }

    // Windows cut off by the end of the longer string
    for start in (long_len - short_len + 1)..long_len {
        best = best.max(score(&longer[start..]));
        if best >= 100.0 {
            return best;
        }
    }

    best
}

fn partial_ratio_slices<T: PartialEq>(s1: &[T], s2: &[T], lcs: fn(&[T], &[T]) -> usize) -> f64 {
    if s1.len() < s2.len() {
        best_window(s1, s2, lcs)
    } else if s1.len() > s2.len() {
        best_window(s2, s1, lcs)
    } else {
        // Equal lengths: the alignment is not unique, try both directions
        best_window(s1, s2, lcs).max(best_window(s2, s1, lcs))
    }
}

/// Partial ratio of two strings.
pub fn partial_ratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return if s1.is_empty() && s2.is_empty() { 100.0 } else { 0.0 };
    }
    if s1 == s2 {
        return 100.0;
    }
    if s1.is_ascii() && s2.is_ascii() {
        return partial_ratio_slices(s1.as_bytes(), s2.as_bytes(), lcs_bytes);
    }

    let c1: Vec<char> = s1.chars().collect();
    let c2: Vec<char> = s2.chars().collect();
    partial_ratio_slices(&c1, &c2, lcs_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ratio_substring() {
        assert!((partial_ratio("this is a test", "this is a test!") - 100.0).abs() < 1e-9);
        assert!((partial_ratio("apple", "apple pie") - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_ratio_edge_window() {
        // "ab" only aligns with a window cut off by the start of the longer string
        let r = partial_ratio("xyzab", "abqqqqqqq");
        assert!((r - 57.142).abs() < 0.01);
        assert!(partial_ratio("cde", "xxxxxab").abs() < 1e-9);
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert!((partial_ratio("", "") - 100.0).abs() < 1e-9);
        assert!(partial_ratio("abc", "").abs() < 1e-9);
    }

    #[test]
    fn test_partial_ratio_symmetric() {
        let ab = partial_ratio("kitten", "sitting");
        let ba = partial_ratio("sitting", "kitten");
        assert!((ab - ba).abs() < 1e-9);
    }
}
