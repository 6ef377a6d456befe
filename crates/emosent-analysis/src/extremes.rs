use emosent_data::{EmojiRecord, EmojiTable};
use emosent_stats::ranking;
use serde::Serialize;

use crate::{MetricError, Subset};

/// Most positive and most negative emoji among the popular ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes<'a> {
    pub threshold: f64,
    /// Number of rows with `occurrences > threshold`.
    pub popular_count: usize,
    /// Highest sentiment; the first in table order wins ties.
    pub most_positive: &'a EmojiRecord,
    /// Lowest sentiment; the first in table order wins ties.
    pub most_negative: &'a EmojiRecord,
}

/// Finds the sentiment extremes among rows with `occurrences > threshold`.
///
/// # Errors
///
/// [`MetricError::EmptyDataset`] if no row passes the threshold.
pub fn extremes_above_threshold(
    table: &EmojiTable,
    threshold: f64,
) -> Result<Extremes<'_>, MetricError> {
    let popular = table
        .iter()
        .filter(|r| r.occurrences > threshold)
        .collect::<Vec<_>>();
    let by_sentiment = |a: &&EmojiRecord, b: &&EmojiRecord| a.sentiment.total_cmp(&b.sentiment);

    let (Some(most_positive), Some(most_negative)) = (
        ranking::first_max_by(popular.iter().copied(), by_sentiment),
        ranking::first_min_by(popular.iter().copied(), by_sentiment),
    ) else {
        return Err(MetricError::EmptyDataset {
            subset: Subset::Popular { threshold },
        });
    };

    Ok(Extremes {
        threshold,
        popular_count: popular.len(),
        most_positive,
        most_negative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{record, scenario_table};

    #[test]
    fn test_scenario_extremes() {
        let table = scenario_table();
        let extremes = extremes_above_threshold(&table, 500.0).unwrap();
        assert_eq!(extremes.most_positive.char, "😀");
        assert_eq!(extremes.most_negative.char, "😡");
        assert_eq!(extremes.popular_count, 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let table = [
            record("rare", 500, 0.5, 0.0, 1.0),
            record("common", 501, 0.5, 0.3, 0.4),
        ]
        .into_iter()
        .collect::<EmojiTable>();
        let extremes = extremes_above_threshold(&table, 500.0).unwrap();
        assert_eq!(extremes.popular_count, 1);
        assert_eq!(extremes.most_positive.char, "common");
        assert_eq!(extremes.most_negative.char, "common");
    }

    #[test]
    fn test_extremes_bound_every_popular_row() {
        let table = [
            (900, 0.1),
            (100, 0.9),
            (700, -0.3),
            (800, 0.6),
            (650, -0.8),
            (999, 0.0),
            (50, -0.95),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (occurrences, s))| record(&i.to_string(), occurrences, 0.5, 0.5 - s, 0.5))
        .collect::<EmojiTable>();

        let extremes = extremes_above_threshold(&table, 500.0).unwrap();
        for r in table.iter().filter(|r| r.occurrences > 500.0) {
            assert!(extremes.most_positive.sentiment >= r.sentiment);
            assert!(extremes.most_negative.sentiment <= r.sentiment);
        }
        assert_eq!(extremes.most_positive.char, "3");
        assert_eq!(extremes.most_negative.char, "4");
    }

    #[test]
    fn test_fractional_count_above_threshold() {
        let table = [
            EmojiRecord::new("at", "AT", 500.0, 0.5, 0.0, 0.0, 1.0),
            EmojiRecord::new("just-above", "JUST ABOVE", 500.5, 0.5, 0.2, 0.4, 0.4),
        ]
        .into_iter()
        .collect::<EmojiTable>();
        let extremes = extremes_above_threshold(&table, 500.0).unwrap();
        assert_eq!(extremes.popular_count, 1);
        assert_eq!(extremes.most_positive.char, "just-above");
        assert!(extremes_above_threshold(&table, 500.5).is_err());
    }

    #[test]
    fn test_ties_pick_first_row() {
        let table = [
            record("first-high", 600, 0.5, 0.1, 0.9),
            record("first-low", 600, 0.5, 0.9, 0.1),
            record("second-high", 600, 0.5, 0.1, 0.9),
            record("second-low", 600, 0.5, 0.9, 0.1),
        ]
        .into_iter()
        .collect::<EmojiTable>();
        let extremes = extremes_above_threshold(&table, 500.0).unwrap();
        assert_eq!(extremes.most_positive.char, "first-high");
        assert_eq!(extremes.most_negative.char, "first-low");
    }

    #[test]
    fn test_no_popular_rows() {
        let table = scenario_table();
        assert_eq!(
            extremes_above_threshold(&table, 600.0).unwrap_err(),
            MetricError::EmptyDataset {
                subset: Subset::Popular { threshold: 600.0 }
            }
        );
    }
}
