//! Partial token ratios
//!
//! The token-based ratios with `partial_ratio` as the underlying comparison.
//! Any token shared by both strings makes the set variants score 100.

use super::partial_ratio::partial_ratio;
use super::{join_tokens, sorted_join, tokenize, TokenSplit};

/// Partial ratio of the two strings with their tokens sorted.
pub fn partial_token_sort_ratio(s1: &str, s2: &str) -> f64 {
    partial_ratio(&sorted_join(s1), &sorted_join(s2))
}

/// Partial ratio over deduplicated token sets.
pub fn partial_token_set_ratio(s1: &str, s2: &str) -> f64 {
    let split = TokenSplit::new(s1, s2);
    if split.intersection.is_empty() && (split.diff_ab.is_empty() || split.diff_ba.is_empty()) {
        return 0.0;
    }
    if !split.intersection.is_empty() {
        return 100.0;
    }

    partial_ratio(&join_tokens(&split.diff_ab), &join_tokens(&split.diff_ba))
}

/// Maximum of `partial_token_sort_ratio` and `partial_token_set_ratio`.
pub fn partial_token_ratio(s1: &str, s2: &str) -> f64 {
    let tokens_a = tokenize(s1);
    let tokens_b = tokenize(s2);
    let split = TokenSplit::new(s1, s2);
    if !split.intersection.is_empty() {
        return 100.0;
    }

    let result = partial_token_sort_ratio(s1, s2);

    // Without duplicate tokens the set comparison repeats the sorted one
    if tokens_a.len() == split.diff_ab.len() && tokens_b.len() == split.diff_ba.len() {
        return result;
    }

    let diff_result = partial_ratio(&join_tokens(&split.diff_ab), &join_tokens(&split.diff_ba));
    result.max(diff_result)
}
