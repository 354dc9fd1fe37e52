//! Jaro similarity
//!
//! Matches are characters equal within a window of `max(len1, len2) / 2 - 1`;
//! transpositions are matched characters appearing in a different order.
//! ASCII strings up to 64 bytes track matches in a `u64` bitmask.

use smallvec::SmallVec;
use std::cmp::{max, min};

use super::CharVec;

type BoolVec = SmallVec<[bool; 64]>;

#[inline(always)]
fn match_window(len1: usize, len2: usize) -> usize {
    (max(len1, len2) / 2).saturating_sub(1)
}

#[inline(always)]
fn jaro_formula(matches: usize, transpositions: usize, len1: usize, len2: usize) -> f64 {
    if matches == 0 {
        return 0.0;
    }
    let m = matches as f64;
    let t = (transpositions / 2) as f64;
    (m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0
}

/// Bitmask variant for ASCII strings of at most 64 bytes.
fn jaro_bitmask(s1: &[u8], s2: &[u8]) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();
    let window = match_window(len1, len2);

    let mut s1_matches: u64 = 0;
    let mut s2_matches: u64 = 0;
    let mut matches = 0usize;

    for (i, &c1) in s1.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = min(i + window + 1, len2);
        for j in start..end {
            if (s2_matches >> j) & 1 == 0 && s2[j] == c1 {
                s1_matches |= 1u64 << i;
                s2_matches |= 1u64 << j;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut remaining = s2_matches;
    for (i, &c1) in s1.iter().enumerate() {
        if (s1_matches >> i) & 1 == 0 {
            continue;
        }
        let k = remaining.trailing_zeros() as usize;
        remaining &= remaining - 1;
        if c1 != s2[k] {
            transpositions += 1;
        }
    }

    jaro_formula(matches, transpositions, len1, len2)
}

fn jaro_slices<T: PartialEq>(s1: &[T], s2: &[T]) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();
    let window = match_window(len1, len2);

    let mut s1_matches: BoolVec = SmallVec::from_elem(false, len1);
    let mut s2_matches: BoolVec = SmallVec::from_elem(false, len2);
    let mut matches = 0usize;

    for i in 0..len1 {
        let start = i.saturating_sub(window);
        let end = min(i + window + 1, len2);
        for j in start..end {
            if s2_matches[j] || s1[i] != s2[j] {
                continue;
            }
            s1_matches[i] = true;
            s2_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0;
    for i in 0..len1 {
        if !s1_matches[i] {
            continue;
        }
        while !s2_matches[k] {
            k += 1;
        }
        if s1[i] != s2[k] {
            transpositions += 1;
        }
        k += 1;
    }

    jaro_formula(matches, transpositions, len1, len2)
}

/// Jaro similarity in `[0, 1]`. Two empty strings are identical.
pub fn jaro_similarity(s1: &str, s2: &str) -> f64 {
    if s1 == s2 {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    if s1.is_ascii() && s2.is_ascii() {
        let (b1, b2) = (s1.as_bytes(), s2.as_bytes());
        if b1.len() <= 64 && b2.len() <= 64 {
            return jaro_bitmask(b1, b2);
        }
        return jaro_slices(b1, b2);
    }

    let c1: CharVec = s1.chars().collect();
    let c2: CharVec = s2.chars().collect();
    jaro_slices(&c1, &c2)
}
