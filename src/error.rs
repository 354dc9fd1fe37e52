//! Call-level errors
//!
//! Row-level failures never reach this type; they become `MissingScore`
//! inside the scorer. Everything here aborts the whole call.

use thiserror::Error;

use crate::host::HostError;

/// Return code for a successful call.
pub const SUCCESS: i32 = 0;
/// Return code for bad arguments or mismatched input shapes.
pub const USAGE_ERROR: i32 = 198;
/// Return code for unexpected runtime faults.
pub const INTERNAL_FAULT: i32 = 909;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown method '{0}'")]
    UnknownMetric(String),

    #[error("unknown mode '{0}' (expected pairwise or match)")]
    UnknownMode(String),

    #[error("{mode}: requires {what}")]
    MissingArgument {
        mode: &'static str,
        what: &'static str,
    },

    #[error("invalid {name} '{value}'")]
    InvalidArgument { name: &'static str, value: String },

    #[error("pairwise inputs differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("observation count mismatch: expected {expected} (n_master + n_ref), found {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    #[error("{mode}: need exactly {expected} variables, found {actual}")]
    ColumnCount {
        mode: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("internal fault: {0}")]
    Internal(String),
}

impl EngineError {
    /// Host-facing return code class for this error.
    pub fn return_code(&self) -> i32 {
        match self {
            EngineError::Host(e) if e.is_internal() => INTERNAL_FAULT,
            EngineError::Internal(_) => INTERNAL_FAULT,
            _ => USAGE_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_map_to_198() {
        assert_eq!(EngineError::UnknownMetric("foo".into()).return_code(), USAGE_ERROR);
        assert_eq!(
            EngineError::RowCountMismatch {
                expected: 3,
                actual: 4
            }
            .return_code(),
            USAGE_ERROR
        );
    }

    #[test]
    fn test_internal_errors_map_to_909() {
        assert_eq!(EngineError::Internal("boom".into()).return_code(), INTERNAL_FAULT);
        let host = HostError::RowOutOfRange { row: 9, rows: 2 };
        assert_eq!(EngineError::from(host).return_code(), INTERNAL_FAULT);
    }

    #[test]
    fn test_messages() {
        let e = EngineError::UnknownMetric("levenstein".into());
        assert_eq!(e.to_string(), "unknown method 'levenstein'");
    }
}
