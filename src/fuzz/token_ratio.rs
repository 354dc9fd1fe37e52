//! Token-based ratios
//!
//! Compare strings after splitting on whitespace: sorted token order
//! (`token_sort_ratio`), deduplicated token sets (`token_set_ratio`), or the
//! better of the two (`token_ratio`).

use super::{join_tokens, sorted_join, TokenSplit};
use crate::distance::indel_distance;
use crate::lcs_core::char_len;

use super::ratio::ratio;

/// Ratio of the two strings with their tokens sorted.
pub fn token_sort_ratio(s1: &str, s2: &str) -> f64 {
    ratio(&sorted_join(s1), &sorted_join(s2))
}

/// Score of an already split, non-degenerate token pair.
///
/// The intersection is shared by both `intersection + diff` strings, so the
/// indel distance between them is the distance between the differences.
fn token_set_score(split: &TokenSplit<'_>) -> f64 {
    let diff_ab = join_tokens(&split.diff_ab);
    let diff_ba = join_tokens(&split.diff_ba);
    let ab_len = char_len(&diff_ab);
    let ba_len = char_len(&diff_ba);
    let sect_len = split.intersection.iter().map(|t| char_len(t)).sum::<usize>()
        + split.intersection.len().saturating_sub(1);

    let separator = (sect_len != 0) as usize;
    let sect_ab_len = sect_len + separator + ab_len;
    let sect_ba_len = sect_len + separator + ba_len;

    let dist = indel_distance(&diff_ab, &diff_ba);
    let result = 100.0 * (1.0 - dist as f64 / (sect_ab_len + sect_ba_len) as f64);
    if sect_len == 0 {
        return result;
    }

    // Intersection against intersection + one difference
    let sect_ab_ratio = 100.0 * (1.0 - (separator + ab_len) as f64 / (sect_len + sect_ab_len) as f64);
    let sect_ba_ratio = 100.0 * (1.0 - (separator + ba_len) as f64 / (sect_len + sect_ba_len) as f64);

    result.max(sect_ab_ratio).max(sect_ba_ratio)
}

fn has_empty_side(split: &TokenSplit<'_>) -> bool {
    split.intersection.is_empty() && (split.diff_ab.is_empty() || split.diff_ba.is_empty())
}

/// Ratio over deduplicated token sets. Strings without tokens score 0.
pub fn token_set_ratio(s1: &str, s2: &str) -> f64 {
    let split = TokenSplit::new(s1, s2);
    if has_empty_side(&split) {
        return 0.0;
    }
    if split.is_subset() {
        return 100.0;
    }
    token_set_score(&split)
}

/// Maximum of `token_sort_ratio` and `token_set_ratio`.
///
/// When a side has no tokens only the sorted comparison applies, so two
/// blank strings score 100.
pub fn token_ratio(s1: &str, s2: &str) -> f64 {
    let split = TokenSplit::new(s1, s2);
    if has_empty_side(&split) {
        return token_sort_ratio(s1, s2);
    }
    if split.is_subset() {
        return 100.0;
    }

    let sorted = token_sort_ratio(s1, s2);
    if sorted >= 100.0 {
        return sorted;
    }
    sorted.max(token_set_score(&split))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_sort_ratio() {
        let r = token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear");
        assert!((r - 100.0).abs() < 1e-9);
        let r = token_sort_ratio("John Smith", "Smith John");
        assert!((r - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_set_ratio_subset() {
        let r = token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear");
        assert!((r - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_set_ratio_single_words() {
        let r = token_set_ratio("kitten", "sitting");
        assert!((r - 61.538).abs() < 0.01);
    }

    #[test]
    fn test_token_set_ratio_with_intersection() {
        // sect "smith", diffs "john" / "jon": one indel over 19 chars
        let r = token_set_ratio("john smith", "jon smith");
        assert!((r - 94.736).abs() < 0.01);
    }

    #[test]
    fn test_token_set_ratio_empty() {
        assert!(token_set_ratio("", "abc").abs() < 1e-9);
        assert!(token_set_ratio("", "").abs() < 1e-9);
    }

    #[test]
    fn test_token_ratio_empty() {
        assert!((token_ratio("", "") - 100.0).abs() < 1e-9);
        assert!((token_ratio("  ", "") - 100.0).abs() < 1e-9);
        assert!(token_ratio("", "abc").abs() < 1e-9);
    }

    #[test]
    fn test_token_ratio_is_max() {
        let (a, b) = ("new york mets", "new york yankees");
        let r = token_ratio(a, b);
        assert!((r - token_sort_ratio(a, b).max(token_set_ratio(a, b))).abs() < 1e-9);
    }
}
