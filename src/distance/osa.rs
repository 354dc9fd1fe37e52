//! Optimal string alignment distance
//!
//! Levenshtein plus transposition of adjacent characters, with the
//! restriction that no substring is edited more than once.

use smallvec::SmallVec;

use super::{normalize, CharVec};
use crate::lcs_core::char_len;

type RowVec = SmallVec<[usize; 128]>;

/// Three-row DP; the row two back supplies the transposition case.
fn osa_slices<T: PartialEq>(s1: &[T], s2: &[T]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut before: RowVec = SmallVec::from_elem(0, len2 + 1);
    let mut prev: RowVec = (0..=len2).collect();
    let mut curr: RowVec = SmallVec::from_elem(0, len2 + 1);

    for i in 1..=len1 {
        curr[0] = i;
        for j in 1..=len2 {
            let cost = (s1[i - 1] != s2[j - 1]) as usize;
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            if i > 1 && j > 1 && s1[i - 1] == s2[j - 2] && s1[i - 2] == s2[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            curr[j] = best;
        }
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[len2]
}

/// OSA distance between two strings.
pub fn osa_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }
    if s1.is_ascii() && s2.is_ascii() {
        return osa_slices(s1.as_bytes(), s2.as_bytes());
    }

    let c1: CharVec = s1.chars().collect();
    let c2: CharVec = s2.chars().collect();
    osa_slices(&c1, &c2)
}

/// `1 - distance / max(len1, len2)`.
pub fn osa_normalized_similarity(s1: &str, s2: &str) -> f64 {
    let max_len = char_len(s1).max(char_len(s2));
    normalize(osa_distance(s1, s2), max_len)
}
