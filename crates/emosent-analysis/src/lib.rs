//! Sentiment metrics over the prepared emoji table
//!
//! Every metric is a pure function of an [`EmojiTable`](emosent_data::EmojiTable):
//!
//! - [`overall_sentiment_split`]: share of positive emojis
//! - [`top_by_occurrences`]: the most used emojis and their positive share
//! - [`extremes_above_threshold`]: most positive and most negative popular emoji
//! - [`average_position`]: where emojis sit within texts on average
//! - [`placement_comparison`]: whether positive or negative emojis sit later
//!
//! A metric whose row subset is empty fails with
//! [`MetricError::EmptyDataset`] instead of producing a meaningless value.
//! [`SentimentReport`] bundles all five.
//!
//! # Examples
//!
//! ```
//! use emosent_analysis::{PlacementVerdict, ReportParams, SentimentReport};
//! use emosent_data::{EmojiRecord, EmojiTable};
//!
//! let table = [
//!     EmojiRecord::new("😀", "GRINNING FACE", 600.0, 0.7, 0.1, 0.2, 0.7),
//!     EmojiRecord::new("😡", "POUTING FACE", 600.0, 0.2, 0.8, 0.1, 0.1),
//! ]
//! .into_iter()
//! .collect::<EmojiTable>();
//!
//! let report = SentimentReport::compute(&table, &ReportParams::default()).unwrap();
//! assert_eq!(report.split.positive_count, 1);
//! assert_eq!(report.extremes.most_negative.char, "😡");
//! assert_eq!(report.placement.verdict, PlacementVerdict::PositiveCloserToEnd);
//! ```

pub use self::{
    error::{MetricError, Subset},
    extremes::{Extremes, extremes_above_threshold},
    position::{
        AveragePosition, PlacementComparison, PlacementVerdict, PositionBand, average_position,
        placement_comparison,
    },
    report::{ReportParams, SentimentReport},
    split::{SentimentSplit, overall_sentiment_split},
    top::{TopRanking, top_by_occurrences},
};

mod error;
mod extremes;
mod position;
mod report;
mod split;
#[cfg(test)]
mod test_util;
mod top;

/// `part / whole * 100`, or `None` when `whole` is zero.
#[expect(clippy::cast_precision_loss)]
fn percent(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), Some(25.0));
        assert_eq!(percent(0, 3), Some(0.0));
        assert_eq!(percent(0, 0), None);
    }
}
