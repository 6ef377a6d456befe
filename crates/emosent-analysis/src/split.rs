use emosent_data::EmojiTable;
use serde::Serialize;

use crate::{MetricError, Subset, percent};

/// Share of positive emojis in the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSplit {
    /// `positive_count / total_count * 100`.
    pub positive_percent: f64,
    pub total_count: usize,
    pub positive_count: usize,
    /// Rows whose sentiment is zero or below.
    pub negative_count: usize,
}

/// Counts positive and non-positive emojis.
///
/// # Errors
///
/// [`MetricError::EmptyDataset`] if the table has no rows.
pub fn overall_sentiment_split(table: &EmojiTable) -> Result<SentimentSplit, MetricError> {
    let total_count = table.len();
    let positive_count = table.iter().filter(|r| r.positive_flag).count();
    let positive_percent =
        percent(positive_count, total_count).ok_or(MetricError::EmptyDataset {
            subset: Subset::All,
        })?;

    Ok(SentimentSplit {
        positive_percent,
        total_count,
        positive_count,
        negative_count: total_count - positive_count,
    })
}
