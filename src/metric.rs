//! Metric registry
//!
//! Maps the fixed catalog of method names to a closed set of metrics. The
//! catalog is ordered: every similarity metric precedes every raw distance,
//! and a metric's output kind follows from which side of that boundary it
//! falls on.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    // Fuzz scorers, already 0-100
    Ratio,
    PartialRatio,
    TokenSort,
    PartialTokenSort,
    TokenSet,
    PartialTokenSet,
    TokenRatio,
    PartialTokenRatio,
    WRatio,
    QRatio,
    // Normalized similarities, 0-1 rescaled to 0-100
    Jaro,
    JaroWinkler,
    NormLev,
    NormOsa,
    NormHamming,
    NormIndel,
    NormLcsseq,
    // Raw distance counts
    Levenshtein,
    Osa,
    Hamming,
    Indel,
    Lcsseq,
}

/// Scale of the values a metric produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Similarity on a 0-100 scale.
    SimilarityPercent,
    /// Non-negative integer edit count.
    RawDistance,
}

/// Which end of the scale is the better match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Strictly better; ties keep the incumbent.
    #[inline(always)]
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::HigherIsBetter => candidate > incumbent,
            Direction::LowerIsBetter => candidate < incumbent,
        }
    }
}

const CATALOG: [(&str, Metric); 22] = [
    ("ratio", Metric::Ratio),
    ("partial_ratio", Metric::PartialRatio),
    ("token_sort", Metric::TokenSort),
    ("partial_token_sort", Metric::PartialTokenSort),
    ("token_set", Metric::TokenSet),
    ("partial_token_set", Metric::PartialTokenSet),
    ("token_ratio", Metric::TokenRatio),
    ("partial_token_ratio", Metric::PartialTokenRatio),
    ("wratio", Metric::WRatio),
    ("qratio", Metric::QRatio),
    ("jaro", Metric::Jaro),
    ("jaro_winkler", Metric::JaroWinkler),
    ("norm_lev", Metric::NormLev),
    ("norm_osa", Metric::NormOsa),
    ("norm_hamming", Metric::NormHamming),
    ("norm_indel", Metric::NormIndel),
    ("norm_lcsseq", Metric::NormLcsseq),
    ("levenshtein", Metric::Levenshtein),
    ("osa", Metric::Osa),
    ("hamming", Metric::Hamming),
    ("indel", Metric::Indel),
    ("lcsseq", Metric::Lcsseq),
];

/// Last metric of the similarity group.
const LAST_SIMILARITY: Metric = Metric::NormLcsseq;

impl Metric {
    /// Resolve an exact, case-sensitive method name.
    pub fn resolve(name: &str) -> Result<Metric, EngineError> {
        CATALOG
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| *m)
            .ok_or_else(|| EngineError::UnknownMetric(name.to_string()))
    }

    /// All metrics in catalog order.
    pub fn all() -> impl Iterator<Item = Metric> {
        CATALOG.iter().map(|(_, m)| *m)
    }

    /// The catalog name of this metric.
    pub fn name(self) -> &'static str {
        CATALOG[self as usize].0
    }

    pub fn output_kind(self) -> OutputKind {
        if self <= LAST_SIMILARITY {
            OutputKind::SimilarityPercent
        } else {
            OutputKind::RawDistance
        }
    }

    pub fn direction(self) -> Direction {
        match self.output_kind() {
            OutputKind::SimilarityPercent => Direction::HigherIsBetter,
            OutputKind::RawDistance => Direction::LowerIsBetter,
        }
    }

    /// Whether the metric reads the Jaro-Winkler prefix weight.
    pub fn uses_prefix_weight(self) -> bool {
        self == Metric::JaroWinkler
    }

    /// Whether the underlying algorithm rejects unequal-length inputs.
    pub fn requires_equal_length(self) -> bool {
        matches!(self, Metric::Hamming | Metric::NormHamming)
    }
}

impl FromStr for Metric {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::resolve(s)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
