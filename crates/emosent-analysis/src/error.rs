use std::fmt;

use serde::Serialize;

/// Row subset a metric aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subset {
    /// Every row of the table.
    All,
    /// The top-k rows by occurrences.
    TopK(usize),
    /// Rows with `occurrences > threshold`.
    Popular { threshold: f64 },
    /// Rows with the positive flag set.
    Positive,
    /// Rows without the positive flag.
    Negative,
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "the whole table"),
            Self::TopK(k) => write!(f, "the top {k} emojis"),
            Self::Popular { threshold } => write!(f, "emojis with more than {threshold} occurrences"),
            Self::Positive => write!(f, "positive emojis"),
            Self::Negative => write!(f, "negative emojis"),
        }
    }
}

/// Errors raised by metric queries.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum MetricError {
    /// The rows a metric aggregates over are empty, so the aggregate is undefined.
    #[display("empty dataset: no rows in {subset}")]
    EmptyDataset { subset: Subset },
}
