//! Non-interactive report
//!
//! Prints the five sentiment views as plain text tables, or the whole
//! [`SentimentReport`] as JSON.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use emosent_analysis::{
    AveragePosition, Extremes, MetricError, PlacementComparison, ReportParams, SentimentReport,
    SentimentSplit, TopRanking, average_position, extremes_above_threshold,
    overall_sentiment_split, placement_comparison, top_by_occurrences,
};
use emosent_data::{EmojiRecord, EmojiTable};

use crate::{command::MetricArgs, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[command(flatten)]
    pub(super) metrics: MetricArgs,
    /// Write the report as JSON instead of text
    #[arg(long)]
    pub(super) json: bool,
    /// JSON output file path (stdout when omitted)
    #[arg(long, requires = "json")]
    pub(super) output: Option<PathBuf>,
}

pub(crate) fn run(data: &Path, arg: &ReportArg) -> anyhow::Result<()> {
    let params = arg.metrics.params();

    eprintln!("Loading emojis from {}...", data.display());
    let table = emosent_data::load(data)
        .with_context(|| format!("Failed to load emoji data: {}", data.display()))?;
    eprintln!("Loaded {} emojis", table.len());

    if arg.json {
        let report = SentimentReport::compute(&table, &params)?;
        Output::save_json(&report, arg.output.clone())?;
        return Ok(());
    }

    let mut output = Output::stdout();
    write_text(&mut output, &table, &params).context("Failed to write report to stdout")?;
    output.finish()
}

/// Writes every view; a view whose metric fails shows the error instead.
fn write_text<W>(w: &mut W, table: &EmojiTable, params: &ReportParams) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "Overall sentiment")?;
    match overall_sentiment_split(table) {
        Ok(split) => write_split(w, &split)?,
        Err(e) => write_error(w, &e)?,
    }
    writeln!(w)?;

    writeln!(w, "Top {} emojis by occurrences", params.top_k)?;
    match top_by_occurrences(table, params.top_k) {
        Ok(top) => write_top(w, &top)?,
        Err(e) => write_error(w, &e)?,
    }
    writeln!(w)?;

    writeln!(
        w,
        "Extremes among emojis with more than {} occurrences",
        params.popular_threshold
    )?;
    match extremes_above_threshold(table, params.popular_threshold) {
        Ok(extremes) => write_extremes(w, &extremes)?,
        Err(e) => write_error(w, &e)?,
    }
    writeln!(w)?;

    writeln!(w, "Average position")?;
    match average_position(table) {
        Ok(position) => write_position(w, &position)?,
        Err(e) => write_error(w, &e)?,
    }
    writeln!(w)?;

    writeln!(w, "Positive vs negative placement")?;
    match placement_comparison(table) {
        Ok(placement) => write_placement(w, &placement)?,
        Err(e) => write_error(w, &e)?,
    }
    Ok(())
}

fn write_error<W>(w: &mut W, error: &MetricError) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "  unavailable: {error}")
}

fn write_split<W>(w: &mut W, split: &SentimentSplit) -> io::Result<()>
where
    W: Write,
{
    let negative_percent = 100.0 - split.positive_percent;
    writeln!(w, "  Emojis:   {:>8}", split.total_count)?;
    writeln!(
        w,
        "  Positive: {:>8} ({:5.1}%)",
        split.positive_count, split.positive_percent
    )?;
    writeln!(
        w,
        "  Negative: {:>8} ({negative_percent:5.1}%)",
        split.negative_count
    )
}

fn write_top<W>(w: &mut W, top: &TopRanking<'_>) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "  {:>4}  {:<6} {:>12} {:>10}  {}",
        "Rank", "Char", "Occurrences", "Sentiment", "Name"
    )?;
    writeln!(w, "  {}", "-".repeat(60))?;
    for (rank, record) in top.records.iter().enumerate() {
        writeln!(
            w,
            "  {:>4}  {:<6} {:>12} {:>+10.3}  {}",
            rank + 1,
            record.char,
            record.occurrences,
            record.sentiment,
            record.unicode_name
        )?;
    }
    writeln!(
        w,
        "  {} of {} positive ({:.1}%)",
        top.positive_count(),
        top.records.len(),
        top.percent_positive
    )
}

fn write_extremes<W>(w: &mut W, extremes: &Extremes<'_>) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "  Popular emojis: {}", extremes.popular_count)?;
    write_extreme(w, "Most positive", extremes.most_positive)?;
    write_extreme(w, "Most negative", extremes.most_negative)
}

fn write_extreme<W>(w: &mut W, label: &str, record: &EmojiRecord) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "  {label}: {} {} (sentiment {:+.3}, {} occurrences)",
        record.char, record.unicode_name, record.sentiment, record.occurrences
    )
}

fn write_position<W>(w: &mut W, position: &AveragePosition) -> io::Result<()>
where
    W: Write,
{
    let stats = &position.stats;
    writeln!(w, "  Mean:   {:8.3} ({})", position.mean, position.band)?;
    writeln!(w, "  Median: {:8.3}", stats.median)?;
    writeln!(w, "  Min:    {:8.3}", stats.min)?;
    writeln!(w, "  Max:    {:8.3}", stats.max)?;
    writeln!(w, "  StdDev: {:8.3}", stats.std_dev)
}

fn write_placement<W>(w: &mut W, placement: &PlacementComparison) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "  Positive mean position: {:.3}", placement.positive_mean)?;
    writeln!(w, "  Negative mean position: {:.3}", placement.negative_mean)?;
    writeln!(w, "  Difference:             {:.3}", placement.difference)?;
    writeln!(w, "  {}", placement.verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_table() -> EmojiTable {
        [
            EmojiRecord::new("😀", "GRINNING FACE", 600.0, 0.7, 0.1, 0.2, 0.7),
            EmojiRecord::new("😡", "POUTING FACE", 600.0, 0.2, 0.8, 0.1, 0.1),
        ]
        .into_iter()
        .collect()
    }

    fn render(table: &EmojiTable, params: &ReportParams) -> String {
        let mut buf = Vec::new();
        write_text(&mut buf, table, params).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = render(&scenario_table(), &ReportParams::default());
        assert!(text.contains("Positive:        1 ( 50.0%)"));
        assert!(text.contains("GRINNING FACE"));
        assert!(text.contains("Most positive: 😀 GRINNING FACE (sentiment +0.600, 600 occurrences)"));
        assert!(text.contains("Most negative: 😡 POUTING FACE (sentiment -0.700, 600 occurrences)"));
        assert!(text.contains("(MIDDLE)"));
        assert!(text.contains("Difference:             0.500"));
        assert!(text.contains("Positive emojis tend to appear closer to the END"));
        assert!(!text.contains("unavailable"));
    }

    #[test]
    fn test_failed_view_does_not_hide_others() {
        let params = ReportParams {
            top_k: 20,
            popular_threshold: 600.0,
        };
        let text = render(&scenario_table(), &params);
        assert!(
            text.contains("unavailable: empty dataset: no rows in emojis with more than 600 occurrences")
        );
        assert!(text.contains("Positive emojis tend to appear closer to the END"));
    }

    #[test]
    fn test_empty_table() {
        let text = render(&EmojiTable::default(), &ReportParams::default());
        assert_eq!(text.matches("unavailable: empty dataset").count(), 5);
    }
}
