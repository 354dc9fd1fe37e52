//! Hamming distance
//!
//! Number of positions at which corresponding characters differ.
//! Only defined for strings of equal length.

use super::{normalize, DistanceError};
use crate::lcs_core::char_len;

/// Hamming distance; unequal lengths are an error, never padded.
pub fn hamming_distance(s1: &str, s2: &str) -> Result<usize, DistanceError> {
    let len1 = char_len(s1);
    let len2 = char_len(s2);
    if len1 != len2 {
        return Err(DistanceError::LengthMismatch {
            left: len1,
            right: len2,
        });
    }

    let distance = if s1.is_ascii() && s2.is_ascii() {
        s1.bytes().zip(s2.bytes()).filter(|(a, b)| a != b).count()
    } else {
        s1.chars().zip(s2.chars()).filter(|(a, b)| a != b).count()
    };
    Ok(distance)
}

/// `1 - distance / len`.
pub fn hamming_normalized_similarity(s1: &str, s2: &str) -> Result<f64, DistanceError> {
    let dist = hamming_distance(s1, s2)?;
    Ok(normalize(dist, char_len(s1)))
}
