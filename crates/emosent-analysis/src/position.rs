//! Where in a text emojis tend to appear
//!
//! `position` is the mean normalized location of an emoji inside the texts it
//! was observed in: 0 is the start of the text and 1 is the end.

use std::fmt;

use emosent_data::EmojiTable;
use emosent_stats::descriptive::{self, DescriptiveStats};
use serde::Serialize;

use crate::{MetricError, Subset};

/// Coarse location of a mean position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionBand {
    Beginning,
    Middle,
    End,
}

impl fmt::Display for PositionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginning => "BEGINNING",
            Self::Middle => "MIDDLE",
            Self::End => "END",
        };
        fmt::Display::fmt(s, f)
    }
}

impl PositionBand {
    /// Means strictly above this are [`PositionBand::End`].
    pub const END_ABOVE: f64 = 0.6;
    /// Means strictly below this are [`PositionBand::Beginning`].
    pub const BEGINNING_BELOW: f64 = 0.4;

    /// Classifies a mean position; both boundaries belong to `Middle`.
    #[must_use]
    pub fn classify(mean: f64) -> Self {
        if mean > Self::END_ABOVE {
            Self::End
        } else if mean < Self::BEGINNING_BELOW {
            Self::Beginning
        } else {
            Self::Middle
        }
    }
}

/// Mean position over the whole table.
#[derive(Debug, Clone, Serialize)]
pub struct AveragePosition {
    pub mean: f64,
    pub band: PositionBand,
    /// Spread of `position` across all rows.
    pub stats: DescriptiveStats,
}

/// Averages `position` over all rows and classifies the mean.
///
/// # Errors
///
/// [`MetricError::EmptyDataset`] if the table has no rows.
pub fn average_position(table: &EmojiTable) -> Result<AveragePosition, MetricError> {
    let stats = DescriptiveStats::new(table.iter().map(|r| r.position)).ok_or(
        MetricError::EmptyDataset {
            subset: Subset::All,
        },
    )?;
    Ok(AveragePosition {
        mean: stats.mean,
        band: PositionBand::classify(stats.mean),
        stats,
    })
}

/// Which group of emojis sits closer to the end of texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementVerdict {
    PositiveCloserToEnd,
    /// Also the verdict when both means are equal.
    NegativeCloserToEnd,
}

impl fmt::Display for PlacementVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PositiveCloserToEnd => "Positive emojis tend to appear closer to the END",
            Self::NegativeCloserToEnd => "Negative emojis tend to appear closer to the END",
        };
        fmt::Display::fmt(s, f)
    }
}

/// Mean position of positive vs non-positive emojis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementComparison {
    pub positive_mean: f64,
    pub negative_mean: f64,
    /// `|positive_mean - negative_mean|`.
    pub difference: f64,
    pub verdict: PlacementVerdict,
}

/// Compares the mean position of the two sentiment groups.
///
/// # Errors
///
/// [`MetricError::EmptyDataset`] naming the group that has no rows. The
/// positive group is checked first.
pub fn placement_comparison(table: &EmojiTable) -> Result<PlacementComparison, MetricError> {
    let group_mean = |positive: bool, subset: Subset| {
        descriptive::mean(
            table
                .iter()
                .filter(|r| r.positive_flag == positive)
                .map(|r| r.position),
        )
        .ok_or(MetricError::EmptyDataset { subset })
    };
    let positive_mean = group_mean(true, Subset::Positive)?;
    let negative_mean = group_mean(false, Subset::Negative)?;

    let verdict = if positive_mean > negative_mean {
        PlacementVerdict::PositiveCloserToEnd
    } else {
        PlacementVerdict::NegativeCloserToEnd
    };
    Ok(PlacementComparison {
        positive_mean,
        negative_mean,
        difference: (positive_mean - negative_mean).abs(),
        verdict,
    })
}
