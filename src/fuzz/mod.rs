//! Fuzzy ratio scorers
//!
//! RapidFuzz-compatible `fuzz` scorers. Every function returns a score in
//! `[0, 100]`.

use ahash::AHashSet;
use smallvec::SmallVec;

pub mod partial_ratio;
pub mod partial_token_ratio;
pub mod ratio;
pub mod token_ratio;
pub mod wratio;

pub use partial_ratio::partial_ratio;
pub use partial_token_ratio::{
    partial_token_ratio, partial_token_set_ratio, partial_token_sort_ratio,
};
pub use ratio::ratio;
pub use token_ratio::{token_ratio, token_set_ratio, token_sort_ratio};
pub use wratio::{qratio, wratio};

pub(crate) type TokenVec<'a> = SmallVec<[&'a str; 16]>;

#[inline(always)]
pub(crate) fn tokenize(s: &str) -> TokenVec<'_> {
    s.split_whitespace().collect()
}

/// Whitespace tokens in sorted order, joined by single spaces.
pub(crate) fn sorted_join(s: &str) -> String {
    let mut tokens = tokenize(s);
    tokens.sort_unstable();
    join_tokens(&tokens)
}

#[inline(always)]
pub(crate) fn join_tokens(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Deduplicated token sets split into intersection and the two differences,
/// each sorted.
pub(crate) struct TokenSplit<'a> {
    pub intersection: TokenVec<'a>,
    pub diff_ab: TokenVec<'a>,
    pub diff_ba: TokenVec<'a>,
}

impl<'a> TokenSplit<'a> {
    pub fn new(s1: &'a str, s2: &'a str) -> Self {
        let a: AHashSet<&str> = s1.split_whitespace().collect();
        let b: AHashSet<&str> = s2.split_whitespace().collect();

        let mut intersection: TokenVec = a.intersection(&b).copied().collect();
        let mut diff_ab: TokenVec = a.difference(&b).copied().collect();
        let mut diff_ba: TokenVec = b.difference(&a).copied().collect();
        intersection.sort_unstable();
        diff_ab.sort_unstable();
        diff_ba.sort_unstable();

        Self {
            intersection,
            diff_ab,
            diff_ba,
        }
    }

    /// One side's token set contains the other's.
    pub fn is_subset(&self) -> bool {
        !self.intersection.is_empty() && (self.diff_ab.is_empty() || self.diff_ba.is_empty())
    }
}
