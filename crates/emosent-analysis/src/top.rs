use emosent_data::{EmojiRecord, EmojiTable};
use emosent_stats::ranking;
use serde::Serialize;

use crate::{MetricError, Subset, percent};

/// The most frequently used emojis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRanking<'a> {
    /// Number of rows requested.
    pub requested: usize,
    /// Rows by descending occurrences; ties keep table order.
    pub records: Vec<&'a EmojiRecord>,
    /// Share of positive rows among `records`.
    ///
    /// The denominator is `records.len()`, which is smaller than
    /// `requested` when the table is short.
    pub percent_positive: f64,
}

impl TopRanking<'_> {
    #[must_use]
    pub fn positive_count(&self) -> usize {
        self.records.iter().filter(|r| r.positive_flag).count()
    }
}

/// Selects the `k` rows with the highest occurrences.
///
/// # Errors
///
/// [`MetricError::EmptyDataset`] if the selection is empty, i.e. the table
/// has no rows or `k` is zero.
pub fn top_by_occurrences(table: &EmojiTable, k: usize) -> Result<TopRanking<'_>, MetricError> {
    let records = ranking::top_k_by(table.records(), k, |a, b| {
        a.occurrences.total_cmp(&b.occurrences)
    });
    let positive_count = records.iter().filter(|r| r.positive_flag).count();
    let percent_positive = percent(positive_count, records.len())
        .ok_or(MetricError::EmptyDataset {
            subset: Subset::TopK(k),
        })?;

    Ok(TopRanking {
        requested: k,
        records,
        percent_positive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::record;

    fn sample_table() -> EmojiTable {
        [
            ("a", 10, 0.2),
            ("b", 50, -0.1),
            ("c", 30, 0.4),
            ("d", 50, 0.3),
            ("e", 5, -0.6),
            ("f", 30, 0.0),
        ]
        .into_iter()
        .map(|(c, occurrences, s)| record(c, occurrences, 0.5, 0.5 - s, 0.5))
        .collect()
    }

    fn chars<'a>(top: &TopRanking<'a>) -> Vec<&'a str> {
        top.records.iter().map(|r| r.char.as_str()).collect()
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let table = sample_table();
        let top = top_by_occurrences(&table, 4).unwrap();
        assert_eq!(chars(&top), ["b", "d", "c", "f"]);
        assert!(
            top.records
                .windows(2)
                .all(|w| w[0].occurrences >= w[1].occurrences)
        );
        // d and c are positive; b and f are not.
        assert_eq!(top.positive_count(), 2);
        assert!((top.percent_positive - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_k_larger_than_table_uses_actual_size() {
        let table = sample_table();
        let top = top_by_occurrences(&table, 20).unwrap();
        assert_eq!(top.requested, 20);
        assert_eq!(top.records.len(), table.len());
        // a, c, d positive out of 6 rows, not out of 20.
        assert!((top.percent_positive - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_selection() {
        let table = sample_table();
        assert_eq!(
            top_by_occurrences(&table, 0).unwrap_err(),
            MetricError::EmptyDataset {
                subset: Subset::TopK(0)
            }
        );
        assert!(top_by_occurrences(&EmojiTable::default(), 20).is_err());
    }

    #[test]
    fn test_fractional_counts_rank_by_value() {
        let csv = "\
Char,Unicode name,Occurrences [5...max],Position [0...1],Neg [0...1],Neut [0...1],Pos [0...1]
a,A,600,0.5,0.1,0.2,0.7
b,B,600.5,0.5,0.8,0.1,0.1
c,C,599.75,0.5,0.1,0.2,0.7
";
        let table = emosent_data::load_from_reader(csv.as_bytes()).unwrap();
        let top = top_by_occurrences(&table, 2).unwrap();
        assert_eq!(chars(&top), ["b", "a"]);
        assert!((top.records[0].occurrences - 600.5).abs() < 1e-12);
    }
}
