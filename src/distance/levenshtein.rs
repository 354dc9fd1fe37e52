//! Levenshtein distance
//!
//! Minimum number of single-character insertions, deletions or substitutions
//! turning one string into the other.

use smallvec::SmallVec;

use super::{normalize, CharVec};
use crate::lcs_core::char_len;

type RowVec = SmallVec<[usize; 64]>;

/// Wagner-Fischer over two rows, after stripping the common prefix and suffix.
#[inline(always)]
fn levenshtein_slices<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    // The shorter side indexes the row
    let (s1, s2) = if s1.len() > s2.len() { (s2, s1) } else { (s1, s2) };

    let prefix = s1.iter().zip(s2).take_while(|(a, b)| a == b).count();
    let (s1, s2) = (&s1[prefix..], &s2[prefix..]);
    let suffix = s1
        .iter()
        .rev()
        .zip(s2.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();
    let s1 = &s1[..s1.len() - suffix];
    let s2 = &s2[..s2.len() - suffix];

    let m = s1.len();
    if m == 0 {
        return s2.len();
    }

    let mut prev_row: RowVec = (0..=m).collect();
    let mut curr_row: RowVec = SmallVec::from_elem(0, m + 1);

    for (j, c2) in s2.iter().enumerate() {
        curr_row[0] = j + 1;
        for (i, c1) in s1.iter().enumerate() {
            let sub_cost = prev_row[i] + (c1 != c2) as usize;
            let del_cost = prev_row[i + 1] + 1;
            let ins_cost = curr_row[i] + 1;
            curr_row[i + 1] = sub_cost.min(del_cost).min(ins_cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[m]
}

/// Levenshtein distance between two strings.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }
    if s1.is_ascii() && s2.is_ascii() {
        return levenshtein_slices(s1.as_bytes(), s2.as_bytes());
    }

    let c1: CharVec = s1.chars().collect();
    let c2: CharVec = s2.chars().collect();
    levenshtein_slices(&c1, &c2)
}

/// `1 - distance / max(len1, len2)`.
pub fn levenshtein_normalized_similarity(s1: &str, s2: &str) -> f64 {
    let max_len = char_len(s1).max(char_len(s2));
    normalize(levenshtein_distance(s1, s2), max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
    }

    #[test]
    fn test_affix_stripping() {
        assert_eq!(levenshtein_distance("prefix_abc", "prefix_abd"), 1);
        assert_eq!(levenshtein_distance("abc_suffix", "abd_suffix"), 1);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_normalized_similarity() {
        assert!((levenshtein_normalized_similarity("", "") - 1.0).abs() < 1e-9);
        let sim = levenshtein_normalized_similarity("kitten", "sitting");
        assert!((sim - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }
}
