//! Jaro-Winkler similarity
//!
//! Jaro similarity boosted by the length of the common prefix (capped at 4)
//! once Jaro exceeds 0.7.

use super::jaro::jaro_similarity;
use super::DistanceError;

const MAX_PREFIX: usize = 4;
const BOOST_THRESHOLD: f64 = 0.7;

/// Largest prefix weight that keeps the result within `[0, 1]`.
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

#[inline(always)]
fn common_prefix_length(s1: &str, s2: &str) -> usize {
    if s1.is_ascii() && s2.is_ascii() {
        return s1
            .bytes()
            .zip(s2.bytes())
            .take(MAX_PREFIX)
            .take_while(|(a, b)| a == b)
            .count();
    }
    s1.chars()
        .zip(s2.chars())
        .take(MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count()
}

/// Jaro-Winkler similarity in `[0, 1]`.
///
/// Fails when `prefix_weight` lies outside `[0, 0.25]`. The check runs per
/// pair, so callers see a missing score for that pair rather than a failed
/// call.
pub fn jaro_winkler_similarity(
    s1: &str,
    s2: &str,
    prefix_weight: f64,
) -> Result<f64, DistanceError> {
    if !(0.0..=MAX_PREFIX_WEIGHT).contains(&prefix_weight) {
        return Err(DistanceError::PrefixWeight(prefix_weight));
    }

    let sim = jaro_similarity(s1, s2);
    if sim <= BOOST_THRESHOLD {
        return Ok(sim);
    }

    let prefix = common_prefix_length(s1, s2) as f64;
    Ok(sim + prefix * prefix_weight * (1.0 - sim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaro_winkler() {
        let sim = jaro_winkler_similarity("MARTHA", "MARHTA", 0.1).unwrap();
        assert!((sim - 0.9611).abs() < 0.001);
        let sim = jaro_winkler_similarity("DWAYNE", "DUANE", 0.1).unwrap();
        assert!((sim - 0.84).abs() < 0.001);
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix_length("prefix", "pretest"), 3);
        assert_eq!(common_prefix_length("abcdef", "abc"), 3);
        assert_eq!(common_prefix_length("abcdef", "abcdef"), 4);
    }

    #[test]
    fn test_zero_weight_is_jaro() {
        let jw = jaro_winkler_similarity("MARTHA", "MARHTA", 0.0).unwrap();
        assert!((jw - jaro_similarity("MARTHA", "MARHTA")).abs() < 1e-12);
    }

    #[test]
    fn test_prefix_weight_out_of_range() {
        assert!(jaro_winkler_similarity("a", "a", 0.3).is_err());
        assert!(jaro_winkler_similarity("a", "a", -0.1).is_err());
        assert!(jaro_winkler_similarity("a", "a", f64::NAN).is_err());
    }
}
