//! Score function adapter
//!
//! One entry point for every metric in the catalog. Similarity metrics come
//! back on a 0-100 scale, distances as raw counts. Algorithm failures are
//! returned as `MissingScore` rather than propagated.

use std::borrow::Cow;

use thiserror::Error;

use crate::distance::{self, DistanceError};
use crate::fuzz;
use crate::metric::Metric;

/// Why a pair produced no score.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("no score: {0}")]
pub struct MissingScore(#[from] pub DistanceError);

/// A score, or the missing sentinel for this pair.
pub type Score = Result<f64, MissingScore>;

/// Score one pair of strings under `metric`.
///
/// `prefix_weight` is read only by `Metric::JaroWinkler`.
pub fn score(s1: &str, s2: &str, metric: Metric, prefix_weight: f64) -> Score {
    let value = match metric {
        Metric::Ratio => fuzz::ratio(s1, s2),
        Metric::PartialRatio => fuzz::partial_ratio(s1, s2),
        Metric::TokenSort => fuzz::token_sort_ratio(s1, s2),
        Metric::PartialTokenSort => fuzz::partial_token_sort_ratio(s1, s2),
        Metric::TokenSet => fuzz::token_set_ratio(s1, s2),
        Metric::PartialTokenSet => fuzz::partial_token_set_ratio(s1, s2),
        Metric::TokenRatio => fuzz::token_ratio(s1, s2),
        Metric::PartialTokenRatio => fuzz::partial_token_ratio(s1, s2),
        Metric::WRatio => fuzz::wratio(s1, s2),
        Metric::QRatio => fuzz::qratio(s1, s2),

        Metric::Jaro => distance::jaro_similarity(s1, s2) * 100.0,
        Metric::JaroWinkler => distance::jaro_winkler_similarity(s1, s2, prefix_weight)? * 100.0,
        Metric::NormLev => distance::levenshtein_normalized_similarity(s1, s2) * 100.0,
        Metric::NormOsa => distance::osa_normalized_similarity(s1, s2) * 100.0,
        Metric::NormHamming => distance::hamming_normalized_similarity(s1, s2)? * 100.0,
        Metric::NormIndel => distance::indel_normalized_similarity(s1, s2) * 100.0,
        Metric::NormLcsseq => distance::lcs_seq_normalized_similarity(s1, s2) * 100.0,

        Metric::Levenshtein => distance::levenshtein_distance(s1, s2) as f64,
        Metric::Osa => distance::osa_distance(s1, s2) as f64,
        Metric::Hamming => distance::hamming_distance(s1, s2)? as f64,
        Metric::Indel => distance::indel_distance(s1, s2) as f64,
        Metric::Lcsseq => distance::lcs_seq_distance(s1, s2) as f64,
    };
    Ok(value)
}

/// Lowercase `s` when `case_fold` is set, borrowing otherwise.
#[inline(always)]
pub fn fold_case(s: &str, case_fold: bool) -> Cow<'_, str> {
    if case_fold {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::OutputKind;

    const SAMPLES: [&str; 6] = ["kitten", "John Smith", "a", "Saturday", "naïve café", "ab ba ab"];

    fn value(s1: &str, s2: &str, metric: Metric) -> f64 {
        score(s1, s2, metric, 0.1).unwrap()
    }

    #[test]
    fn test_self_similarity() {
        for metric in Metric::all() {
            for s in SAMPLES {
                let expected = match metric.output_kind() {
                    OutputKind::SimilarityPercent => 100.0,
                    OutputKind::RawDistance => 0.0,
                };
                assert!((value(s, s, metric) - expected).abs() < 1e-9, "{metric} on {s:?}");
            }
        }
    }

    #[test]
    fn test_range() {
        let pairs = [("kitten", "sitting"), ("John Smith", "Smith Jon"), ("abc", ""), ("", "")];
        for metric in Metric::all() {
            for (a, b) in pairs {
                let Ok(v) = score(a, b, metric, 0.1) else {
                    assert!(metric.requires_equal_length(), "{metric} on {a:?}/{b:?}");
                    continue;
                };
                match metric.output_kind() {
                    OutputKind::SimilarityPercent => {
                        assert!((0.0..=100.0).contains(&v), "{metric}: {v}")
                    }
                    OutputKind::RawDistance => assert!(v >= 0.0 && v.fract() == 0.0, "{metric}: {v}"),
                }
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("kitten", "sitting"), ("Robert", "Rupert"), ("apple inc", "inc apple co")];
        for metric in Metric::all() {
            for (a, b) in pairs {
                match (score(a, b, metric, 0.1), score(b, a, metric, 0.1)) {
                    (Ok(x), Ok(y)) => assert!((x - y).abs() < 1e-9, "{metric}: {x} vs {y}"),
                    (Err(_), Err(_)) => {}
                    other => panic!("{metric}: asymmetric missing {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_rescaled_metrics() {
        assert!((value("MARTHA", "MARHTA", Metric::Jaro) - 94.444).abs() < 0.01);
        assert!((value("MARTHA", "MARHTA", Metric::JaroWinkler) - 96.111).abs() < 0.01);
        assert!((value("kitten", "sitting", Metric::NormIndel) - 61.538).abs() < 0.01);
    }

    #[test]
    fn test_raw_distances() {
        assert_eq!(value("kitten", "sitting", Metric::Levenshtein), 3.0);
        assert_eq!(value("flaw", "lawn", Metric::Levenshtein), 2.0);
        assert_eq!(value("ab", "ba", Metric::Osa), 1.0);
        assert_eq!(value("karolin", "kathrin", Metric::Hamming), 3.0);
        assert_eq!(value("kitten", "sitting", Metric::Indel), 5.0);
        assert_eq!(value("kitten", "sitting", Metric::Lcsseq), 3.0);
    }

    #[test]
    fn test_hamming_unequal_is_missing() {
        assert!(score("abc", "abcd", Metric::Hamming, 0.1).is_err());
        assert!(score("abc", "abcd", Metric::NormHamming, 0.1).is_err());
    }

    #[test]
    fn test_prefix_weight_only_affects_jaro_winkler() {
        let low = score("MARTHA", "MARHTA", Metric::JaroWinkler, 0.0).unwrap();
        let high = score("MARTHA", "MARHTA", Metric::JaroWinkler, 0.25).unwrap();
        assert!(high > low);

        for metric in Metric::all().filter(|m| !m.uses_prefix_weight()) {
            let a = score("MARTHA", "MARHTA", metric, 0.0);
            let b = score("MARTHA", "MARHTA", metric, 0.25);
            assert_eq!(a, b, "{metric}");
        }
    }

    #[test]
    fn test_out_of_range_prefix_weight_is_missing() {
        assert_eq!(
            score("MARTHA", "MARHTA", Metric::JaroWinkler, 0.5),
            Err(MissingScore(DistanceError::PrefixWeight(0.5)))
        );
        assert!(score("MARTHA", "MARHTA", Metric::Jaro, 0.5).is_ok());
        assert!(score("MARTHA", "MARHTA", Metric::Ratio, -1.0).is_ok());
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("ABC", true), "abc");
        assert!(matches!(fold_case("ABC", false), Cow::Borrowed("ABC")));
    }

    #[test]
    fn test_case_fold_scores() {
        assert!(value("ABC", "abc", Metric::Ratio) < 100.0);
        let folded = value(&fold_case("ABC", true), &fold_case("abc", true), Metric::Ratio);
        assert!((folded - 100.0).abs() < 1e-9);
    }
}
