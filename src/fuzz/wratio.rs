//! WRatio and QRatio
//!
//! WRatio weighs several scorers by how different the string lengths are.
//! QRatio is ratio with empty input scoring 0.

use super::partial_ratio::partial_ratio;
use super::partial_token_ratio::partial_token_ratio;
use super::ratio::ratio;
use super::token_ratio::token_ratio;
use crate::lcs_core::char_len;

const UNBASE_SCALE: f64 = 0.95;

/// Quick ratio; either string empty scores 0.
pub fn qratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    ratio(s1, s2)
}

/// Weighted ratio.
///
/// Similar lengths (ratio below 1.5) combine `ratio` with a scaled
/// `token_ratio`; otherwise partial scorers are blended in, scaled down by 0.9,
/// or by 0.6 once one string is at least eight times longer.
pub fn wratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    let len1 = char_len(s1);
    let len2 = char_len(s2);
    let len_ratio = if len1 > len2 {
        len1 as f64 / len2 as f64
    } else {
        len2 as f64 / len1 as f64
    };

    let mut end_ratio = ratio(s1, s2);

    if len_ratio < 1.5 {
        return end_ratio.max(token_ratio(s1, s2) * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    end_ratio = end_ratio.max(partial_ratio(s1, s2) * partial_scale);
    end_ratio.max(partial_token_ratio(s1, s2) * UNBASE_SCALE * partial_scale)
}
