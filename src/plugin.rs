//! Host plugin entry point
//!
//! Argument shapes:
//!
//! ```text
//! pairwise <method> [nocase] [pw=<f>]                  text, text, numeric
//! match <method> <n_master> <n_ref> [nocase] [pw=<f>]  text, numeric, numeric
//! ```
//!
//! In match mode the text column holds the master rows followed by the
//! reference rows. Every structural check, column types included, runs
//! before the first score is computed, so a rejected call leaves the output
//! columns untouched.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error};

use crate::batch::{run_match, run_pairwise};
use crate::error::{EngineError, INTERNAL_FAULT, SUCCESS};
use crate::host::{truncate_to_buffer, Dataset, Diagnostics, HostError};
use crate::metric::Metric;
use crate::options::MatchOptions;

const MODE_PAIRWISE: &str = "pairwise";
const MODE_MATCH: &str = "match";
const COLUMNS: usize = 3;

/// Expected column types, `true` for text.
const PAIRWISE_LAYOUT: [bool; COLUMNS] = [true, true, false];
const MATCH_LAYOUT: [bool; COLUMNS] = [true, false, false];

/// A parsed plugin invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Pairwise {
        metric: Metric,
        options: MatchOptions,
    },
    Match {
        metric: Metric,
        n_master: usize,
        n_ref: usize,
        options: MatchOptions,
    },
}

impl Command {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, EngineError> {
        let mode = args.first().ok_or(EngineError::MissingArgument {
            mode: "fuzzlink",
            what: "mode (pairwise or match)",
        })?;

        match mode.as_ref() {
            MODE_PAIRWISE => {
                let metric = args.get(1).ok_or(EngineError::MissingArgument {
                    mode: MODE_PAIRWISE,
                    what: "method argument",
                })?;
                Ok(Command::Pairwise {
                    metric: Metric::resolve(metric.as_ref())?,
                    options: MatchOptions::from_flags(&args[2..])?,
                })
            }
            MODE_MATCH => {
                if args.len() < 4 {
                    return Err(EngineError::MissingArgument {
                        mode: MODE_MATCH,
                        what: "method, n_master, n_ref",
                    });
                }
                Ok(Command::Match {
                    metric: Metric::resolve(args[1].as_ref())?,
                    n_master: parse_count("n_master", args[2].as_ref())?,
                    n_ref: parse_count("n_ref", args[3].as_ref())?,
                    options: MatchOptions::from_flags(&args[4..])?,
                })
            }
            other => Err(EngineError::UnknownMode(other.to_string())),
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            Command::Pairwise { .. } => MODE_PAIRWISE,
            Command::Match { .. } => MODE_MATCH,
        }
    }

    fn layout(&self) -> [bool; COLUMNS] {
        match self {
            Command::Pairwise { .. } => PAIRWISE_LAYOUT,
            Command::Match { .. } => MATCH_LAYOUT,
        }
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<usize, EngineError> {
    value
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidArgument {
            name,
            value: value.to_string(),
        })
}

/// Run one plugin invocation against `dataset`.
///
/// Returns `SUCCESS`, `USAGE_ERROR` or `INTERNAL_FAULT`. Failures are
/// described through `diagnostics.error` and panics never cross this call.
pub fn call<S, D, G>(args: &[S], dataset: &mut D, diagnostics: &mut G) -> i32
where
    S: AsRef<str>,
    D: Dataset + ?Sized,
    G: Diagnostics + Send + ?Sized,
{
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let command = Command::parse(args)?;
        execute(&command, dataset, diagnostics)
    }));

    match outcome {
        Ok(Ok(())) => SUCCESS,
        Ok(Err(e)) => {
            error!(error = %e, "call failed");
            diagnostics.error(&format!("fuzzlink: {e}\n"));
            e.return_code()
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(message, "internal fault");
            diagnostics.error(&format!("fuzzlink: {message}\n"));
            INTERNAL_FAULT
        }
    }
}

/// Run an already parsed command.
pub fn execute<D, G>(command: &Command, dataset: &mut D, diagnostics: &mut G) -> Result<(), EngineError>
where
    D: Dataset + ?Sized,
    G: Diagnostics + Send + ?Sized,
{
    let columns = dataset.column_count();
    if columns != COLUMNS {
        return Err(EngineError::ColumnCount {
            mode: command.mode(),
            expected: COLUMNS,
            actual: columns,
        });
    }
    check_layout(dataset, command.layout())?;
    let rows = dataset.row_count();
    debug!(?command, rows, "executing");

    match command {
        Command::Pairwise { metric, options } => {
            let left = read_column(dataset, 0, 0..rows)?;
            let right = read_column(dataset, 1, 0..rows)?;
            let scores = run_pairwise(&left, &right, *metric, options)?;
            for (row, score) in scores.into_iter().enumerate() {
                dataset.store(2, row, score.ok())?;
            }
        }
        Command::Match {
            metric,
            n_master,
            n_ref,
            options,
        } => {
            let expected = n_master
                .checked_add(*n_ref)
                .ok_or_else(|| EngineError::InvalidArgument {
                    name: "n_master + n_ref",
                    value: format!("{n_master} + {n_ref}"),
                })?;
            if rows != expected {
                return Err(EngineError::RowCountMismatch {
                    expected,
                    actual: rows,
                });
            }
            let master = read_column(dataset, 0, 0..*n_master)?;
            let reference = read_column(dataset, 0, *n_master..rows)?;
            let results = run_match(&master, &reference, *metric, options, |done, total| {
                diagnostics.display(&format!("  matched {done} of {total}\n"))
            });
            for (row, result) in results.into_iter().enumerate() {
                dataset.store(1, row, result.score)?;
                dataset.store(2, row, result.index.map(|j| j as f64))?;
            }
        }
    }
    Ok(())
}

fn check_layout<D: Dataset + ?Sized>(dataset: &D, layout: [bool; COLUMNS]) -> Result<(), HostError> {
    for (column, text) in layout.into_iter().enumerate() {
        match (text, dataset.is_text(column)) {
            (true, false) => return Err(HostError::NotText(column)),
            (false, true) => return Err(HostError::NotNumeric(column)),
            _ => {}
        }
    }
    Ok(())
}

fn read_column<D: Dataset + ?Sized>(
    dataset: &D,
    column: usize,
    rows: std::ops::Range<usize>,
) -> Result<Vec<String>, EngineError> {
    rows.map(|row| -> Result<String, EngineError> {
        let text = dataset.read_text(column, row)?;
        Ok(truncate_to_buffer(&text).to_owned())
    })
    .collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::USAGE_ERROR;
    use crate::host::MemoryTable;

    #[test]
    fn test_parse_pairwise() {
        let command = Command::parse(&["pairwise", "levenshtein", "nocase"]).unwrap();
        let Command::Pairwise { metric, options } = command else {
            panic!("expected pairwise");
        };
        assert_eq!(metric, Metric::Levenshtein);
        assert!(options.case_fold);
    }

    #[test]
    fn test_parse_match() {
        let command = Command::parse(&["match", "jaro_winkler", "3", "5", "pw=0.2"]).unwrap();
        assert!(matches!(
            command,
            Command::Match { metric: Metric::JaroWinkler, n_master: 3, n_ref: 5, .. }
        ));
    }

    #[test]
    fn test_parse_errors() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Command::parse(&empty),
            Err(EngineError::MissingArgument { .. })
        ));
        assert!(matches!(
            Command::parse(&["merge", "ratio"]),
            Err(EngineError::UnknownMode(_))
        ));
        assert!(matches!(
            Command::parse(&["pairwise"]),
            Err(EngineError::MissingArgument { mode: "pairwise", .. })
        ));
        assert!(matches!(
            Command::parse(&["pairwise", "Ratio"]),
            Err(EngineError::UnknownMetric(_))
        ));
        assert!(matches!(
            Command::parse(&["match", "ratio", "2"]),
            Err(EngineError::MissingArgument { mode: "match", .. })
        ));
        assert!(matches!(
            Command::parse(&["match", "ratio", "two", "3"]),
            Err(EngineError::InvalidArgument { name: "n_master", .. })
        ));
    }

    #[test]
    fn test_layout_rejects_swapped_outputs() {
        let table = MemoryTable::new(2)
            .with_text(["a", "b"])
            .with_numeric()
            .with_text(["", ""]);
        assert_eq!(check_layout(&table, MATCH_LAYOUT), Err(HostError::NotNumeric(2)));
        assert_eq!(check_layout(&table, PAIRWISE_LAYOUT), Err(HostError::NotText(1)));
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }

    #[test]
    fn test_error_code_class() {
        assert_eq!(
            EngineError::UnknownMode("x".into()).return_code(),
            USAGE_ERROR
        );
    }
}
