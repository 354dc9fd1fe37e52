//! Bit-parallel longest common subsequence
//!
//! Hyyrö's bit-vector formulation for ASCII input, O(n*m/64).
//! Reference: Heikki Hyyrö - "A Note on Bit-Parallel Alignment Computation" (2004)
//!
//! Unicode input falls back to a row-reusing DP with thread-local buffers.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::cmp::max;

type CharVec = SmallVec<[char; 64]>;

thread_local! {
    static DP_PREV: RefCell<Vec<usize>> = RefCell::new(Vec::with_capacity(512));
    static DP_CURR: RefCell<Vec<usize>> = RefCell::new(Vec::with_capacity(512));
}

/// Single-word LCS for a pattern of at most 64 bytes.
#[inline(always)]
fn lcs_single_word(s1: &[u8], s2: &[u8]) -> usize {
    let len1 = s1.len();
    if len1 == 0 || s2.is_empty() {
        return 0;
    }

    let mut block = [0u64; 256];
    for (i, &c) in s1.iter().enumerate() {
        block[c as usize] |= 1u64 << i;
    }

    let mut s: u64 = !0u64;
    for &c2 in s2 {
        let u = s & block[c2 as usize];
        s = s.wrapping_add(u) | s.wrapping_sub(u);
    }

    let mask = if len1 == 64 { !0u64 } else { (1u64 << len1) - 1 };
    len1 - (s & mask).count_ones() as usize
}

/// Multi-word LCS for patterns longer than 64 bytes.
///
/// Carries are propagated across words from the least significant block.
fn lcs_multi_word(s1: &[u8], s2: &[u8]) -> usize {
    let len1 = s1.len();
    let words = len1.div_ceil(64);

    let mut blocks: Vec<[u64; 256]> = vec![[0u64; 256]; words];
    for (i, &c) in s1.iter().enumerate() {
        blocks[i / 64][c as usize] |= 1u64 << (i % 64);
    }

    let mut s: Vec<u64> = vec![!0u64; words];
    for &c2 in s2 {
        let mut carry = 0u64;
        for (w, sw) in s.iter_mut().enumerate() {
            let u = *sw & blocks[w][c2 as usize];
            let (sum, c_a) = sw.overflowing_add(u);
            let (sum, c_b) = sum.overflowing_add(carry);
            carry = (c_a | c_b) as u64;
            *sw = sum | (*sw - u);
        }
    }

    let mut zeros = 0usize;
    for (w, sw) in s.iter().enumerate() {
        let bits = if w + 1 == words && len1 % 64 != 0 {
            len1 % 64
        } else {
            64
        };
        let mask = if bits == 64 { !0u64 } else { (1u64 << bits) - 1 };
        zeros += bits - (sw & mask).count_ones() as usize;
    }
    zeros
}

/// LCS over raw bytes; the shorter side becomes the bit pattern.
#[inline(always)]
pub fn lcs_bytes(s1: &[u8], s2: &[u8]) -> usize {
    let (short, long) = if s1.len() <= s2.len() { (s1, s2) } else { (s2, s1) };
    if short.is_empty() {
        return 0;
    }
    if short.len() <= 64 {
        lcs_single_word(short, long)
    } else {
        lcs_multi_word(short, long)
    }
}

/// LCS over char slices.
pub fn lcs_chars(s1: &[char], s2: &[char]) -> usize {
    let (short, long) = if s1.len() <= s2.len() { (s1, s2) } else { (s2, s1) };
    let m = short.len();
    if m == 0 {
        return 0;
    }
    if short == long {
        return m;
    }

    DP_PREV.with(|p| {
        DP_CURR.with(|c| {
            let mut prev = p.borrow_mut();
            let mut curr = c.borrow_mut();
            prev.clear();
            prev.resize(m + 1, 0);
            curr.clear();
            curr.resize(m + 1, 0);

            for c2 in long {
                for (i, c1) in short.iter().enumerate() {
                    curr[i + 1] = if c1 == c2 {
                        prev[i] + 1
                    } else {
                        max(prev[i + 1], curr[i])
                    };
                }
                std::mem::swap(&mut *prev, &mut *curr);
                curr.fill(0);
            }
            prev[m]
        })
    })
}

/// LCS length of two strings, measured in chars.
#[inline(always)]
pub fn lcs_fast(s1: &str, s2: &str) -> usize {
    if s1.is_ascii() && s2.is_ascii() {
        return lcs_bytes(s1.as_bytes(), s2.as_bytes());
    }

    let c1: CharVec = s1.chars().collect();
    let c2: CharVec = s2.chars().collect();
    lcs_chars(&c1, &c2)
}

/// Char length with an ASCII fast path.
#[inline(always)]
pub fn char_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().count()
    }
}

/// `100 * 2 * lcs / (len1 + len2)`; two empty inputs are identical.
#[inline(always)]
pub fn ratio_from_lcs(len1: usize, len2: usize, lcs: usize) -> f64 {
    let total = len1 + len2;
    if total == 0 {
        return 100.0;
    }
    100.0 * (2.0 * lcs as f64) / (total as f64)
}
