//! Pairwise executor

use rayon::prelude::*;
use tracing::debug;

use super::fold_all;
use crate::error::EngineError;
use crate::metric::Metric;
use crate::options::MatchOptions;
use crate::scorer::{score, Score};

/// Score `strings1[i]` against `strings2[i]` for every row, in input order.
///
/// Unequal input lengths fail the whole call before anything is scored.
pub fn run_pairwise<A, B>(
    strings1: &[A],
    strings2: &[B],
    metric: Metric,
    options: &MatchOptions,
) -> Result<Vec<Score>, EngineError>
where
    A: AsRef<str> + Sync,
    B: AsRef<str> + Sync,
{
    if strings1.len() != strings2.len() {
        return Err(EngineError::LengthMismatch {
            left: strings1.len(),
            right: strings2.len(),
        });
    }
    let rows = strings1.len();
    let parallel = options.fan_out(rows);
    debug!(%metric, rows, parallel, case_fold = options.case_fold, "running pairwise");

    let left = fold_all(strings1, options.case_fold);
    let right = fold_all(strings2, options.case_fold);
    let pw = options.prefix_weight;

    let scores = if parallel {
        left.par_iter()
            .zip(right.par_iter())
            .map(|(a, b)| score(a, b, metric, pw))
            .collect()
    } else {
        left.iter()
            .zip(right.iter())
            .map(|(a, b)| score(a, b, metric, pw))
            .collect()
    };
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_rows() {
        let scores = run_pairwise(
            &["kitten", "flaw"],
            &["sitting", "lawn"],
            Metric::Levenshtein,
            &MatchOptions::default(),
        )
        .unwrap();
        assert_eq!(scores, vec![Ok(3.0), Ok(2.0)]);
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let result = run_pairwise(&["a", "b"], &["a"], Metric::Ratio, &MatchOptions::default());
        assert!(matches!(
            result,
            Err(EngineError::LengthMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_missing_rows_do_not_abort() {
        let scores = run_pairwise(
            &["abc", "abc"],
            &["abcd", "abd"],
            Metric::Hamming,
            &MatchOptions::default(),
        )
        .unwrap();
        assert!(scores[0].is_err());
        assert_eq!(scores[1], Ok(1.0));
    }

    #[test]
    fn test_case_fold() {
        let options = MatchOptions {
            case_fold: true,
            ..MatchOptions::default()
        };
        let scores = run_pairwise(&["ABC"], &["abc"], Metric::Ratio, &options).unwrap();
        assert_eq!(scores, vec![Ok(100.0)]);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let left: Vec<String> = (0..250).map(|i| format!("record {i}")).collect();
        let right: Vec<String> = (0..250).map(|i| format!("record {}", i * 7 % 250)).collect();

        let parallel = run_pairwise(&left, &right, Metric::WRatio, &MatchOptions::default()).unwrap();
        let serial = MatchOptions {
            parallel: false,
            ..MatchOptions::default()
        };
        let sequential = run_pairwise(&left, &right, Metric::WRatio, &serial).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        let scores = run_pairwise(&empty, &empty, Metric::Ratio, &MatchOptions::default()).unwrap();
        assert!(scores.is_empty());
    }
}
