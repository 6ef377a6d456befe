use emosent_data::EmojiTable;
use serde::Serialize;

use crate::{
    AveragePosition, Extremes, MetricError, PlacementComparison, SentimentSplit, TopRanking,
    average_position, extremes_above_threshold, overall_sentiment_split, placement_comparison,
    top_by_occurrences,
};

/// Parameters of the parametrized metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportParams {
    /// Rows in the top ranking.
    pub top_k: usize,
    /// Rows must have strictly more occurrences than this to count as popular.
    pub popular_threshold: f64,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top_k: 20,
            popular_threshold: 500.0,
        }
    }
}

/// All five metrics computed over one table.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport<'a> {
    pub params: ReportParams,
    pub row_count: usize,
    pub split: SentimentSplit,
    pub top: TopRanking<'a>,
    pub extremes: Extremes<'a>,
    pub position: AveragePosition,
    pub placement: PlacementComparison,
}

impl<'a> SentimentReport<'a> {
    /// Runs every metric in order.
    ///
    /// # Errors
    ///
    /// The first [`MetricError`] any metric returns.
    pub fn compute(table: &'a EmojiTable, params: &ReportParams) -> Result<Self, MetricError> {
        Ok(Self {
            params: *params,
            row_count: table.len(),
            split: overall_sentiment_split(table)?,
            top: top_by_occurrences(table, params.top_k)?,
            extremes: extremes_above_threshold(table, params.popular_threshold)?,
            position: average_position(table)?,
            placement: placement_comparison(table)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{PlacementVerdict, PositionBand, Subset, test_util::scenario_table};

    #[test]
    fn test_default_params() {
        let params = ReportParams::default();
        assert_eq!(params.top_k, 20);
        assert!((params.popular_threshold - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scenario_report() {
        let table = scenario_table();
        let report = SentimentReport::compute(&table, &ReportParams::default()).unwrap();
        assert_eq!(report.row_count, 2);
        assert_eq!(report.split.positive_count, 1);
        assert_eq!(report.top.records.len(), 2);
        assert_eq!(report.extremes.most_positive.char, "😀");
        assert_eq!(report.position.band, PositionBand::Middle);
        assert_eq!(
            report.placement.verdict,
            PlacementVerdict::PositiveCloserToEnd
        );
    }

    #[test]
    fn test_first_error_wins() {
        let table = scenario_table();
        let params = ReportParams {
            top_k: 0,
            popular_threshold: 10_000.0,
        };
        assert_eq!(
            SentimentReport::compute(&table, &params).unwrap_err(),
            MetricError::EmptyDataset {
                subset: Subset::TopK(0)
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        let table = scenario_table();
        let report = SentimentReport::compute(&table, &ReportParams::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["params"]["top_k"], 20);
        assert_eq!(json["split"]["total_count"], 2);
        assert_eq!(json["top"]["records"][0]["char"], "😀");
        assert_eq!(json["top"]["records"][0]["positive flag"], true);
        assert_eq!(json["extremes"]["most_negative"]["char"], "😡");
        assert_eq!(json["position"]["band"], "MIDDLE");
        assert_eq!(json["placement"]["verdict"], "positive_closer_to_end");
        assert!(matches!(json["position"]["stats"]["median"], Value::Number(_)));
    }
}
