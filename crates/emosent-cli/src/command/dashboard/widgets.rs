use emosent_analysis::{
    AveragePosition, Extremes, MetricError, PlacementComparison, PositionBand, SentimentSplit,
    TopRanking,
};
use emosent_data::EmojiRecord;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect, Spacing},
    style::{Color, Modifier, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{
        Bar, BarChart, Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

use super::app::View;

pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const SELECTED_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const POSITIVE_STYLE: Style = Style::new().fg(Color::Green);
const NEGATIVE_STYLE: Style = Style::new().fg(Color::Red);

/// Bar values are integers; fractions are scaled by this before charting.
const BAR_SCALE: f64 = 1000.0;

fn scaled_bar(value: f64) -> u64 {
    count_bar(value * BAR_SCALE)
}

/// Rounds a non-negative count to a bar value.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_bar(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

fn sentiment_style(sentiment: f64) -> Style {
    if sentiment > 0.0 {
        POSITIVE_STYLE
    } else {
        NEGATIVE_STYLE
    }
}

/// One line of `key desc | key desc` pairs.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    pub bindings: &'a [KeyBinding<'a>],
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            for (i, key) in keys.iter().copied().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("/", SEPARATOR_STYLE));
                }
                spans.push(Span::styled(key, KEY_STYLE));
            }
            spans.push(Span::from(" "));
            spans.push(Span::styled(desc, DESCRIPTION_STYLE));
        }
        Line::from(spans).centered().render(area, buf);
    }
}

/// Numbered view titles with the current one highlighted.
#[derive(Debug)]
pub struct ViewTabs {
    pub selected: View,
}

impl Widget for ViewTabs {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut spans = vec![];
        for (i, view) in View::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", SEPARATOR_STYLE));
            }
            let style = if view == self.selected {
                SELECTED_STYLE
            } else {
                DESCRIPTION_STYLE
            };
            spans.push(Span::styled(format!("{} {}", i + 1, view.title()), style));
        }
        Line::from(spans).render(area, buf);
    }
}

/// Replaces a view whose metric has no rows to aggregate.
#[derive(Debug)]
pub struct MetricErrorView<'a> {
    pub view: View,
    pub error: &'a MetricError,
}

impl Widget for MetricErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Paragraph::new(vec![
            Line::from("Not available").style(NEGATIVE_STYLE),
            Line::from(""),
            Line::from(self.error.to_string()),
        ])
        .centered()
        .block(Block::bordered().title(self.view.title()))
        .render(area, buf);
    }
}

#[derive(Debug)]
pub struct SplitView<'a> {
    pub split: &'a SentimentSplit,
}

impl Widget for SplitView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let split = self.split;
        let block = Block::bordered().title(View::Split.title());
        let [text_area, chart_area] =
            Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)])
                .areas(block.inner(area));

        let text = Paragraph::new(vec![
            Line::raw(format!("  Emojis:   {:8}", split.total_count)),
            Line::styled(
                format!(
                    "  Positive: {:8} ({:5.1}%)",
                    split.positive_count, split.positive_percent
                ),
                POSITIVE_STYLE,
            ),
            Line::styled(
                format!(
                    "  Negative: {:8} ({:5.1}%)",
                    split.negative_count,
                    100.0 - split.positive_percent
                ),
                NEGATIVE_STYLE,
            ),
        ]);
        let chart = BarChart::new(vec![
            Bar::with_label("Positive", split.positive_count as u64).style(POSITIVE_STYLE),
            Bar::with_label("Negative", split.negative_count as u64).style(NEGATIVE_STYLE),
        ])
        .bar_width(10)
        .bar_gap(4);

        block.render(area, buf);
        text.render(text_area, buf);
        chart.render(chart_area, buf);
    }
}

#[derive(Debug)]
pub struct TopView<'a> {
    pub top: &'a TopRanking<'a>,
    pub selected: usize,
}

impl Widget for TopView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let top = self.top;
        let [list_area, chart_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .spacing(Spacing::Overlap(1))
                .areas(area);

        let items = top
            .records
            .iter()
            .enumerate()
            .map(|(rank, record)| {
                ListItem::new(format!(
                    "{:>3}. {:<3} {:>9} {:>+7.3}  {}",
                    rank + 1,
                    record.char,
                    record.occurrences,
                    record.sentiment,
                    record.unicode_name
                ))
                .style(sentiment_style(record.sentiment))
            })
            .collect::<Vec<_>>();
        let title = format!(
            "Top {} by occurrences: {} of {} positive ({:.1}%)",
            top.requested,
            top.positive_count(),
            top.records.len(),
            top.percent_positive
        );
        let list = List::new(items)
            .block(
                Block::bordered()
                    .title(title)
                    .merge_borders(MergeStrategy::Exact),
            )
            .highlight_style(SELECTED_STYLE)
            .highlight_symbol(">> ");
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));

        let chart = BarChart::new(
            top.records
                .iter()
                .map(|record| {
                    Bar::with_label(record.char.clone(), count_bar(record.occurrences))
                        .style(sentiment_style(record.sentiment))
                })
                .collect::<Vec<_>>(),
        )
        .block(
            Block::bordered()
                .title("Occurrences")
                .merge_borders(MergeStrategy::Exact),
        )
        .direction(Direction::Horizontal)
        .bar_gap(0);

        StatefulWidget::render(list, list_area, buf, &mut list_state);
        chart.render(chart_area, buf);
    }
}

#[derive(Debug)]
pub struct ExtremesView<'a> {
    pub extremes: &'a Extremes<'a>,
}

impl Widget for ExtremesView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let extremes = self.extremes;
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(area);
        let [positive_area, negative_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(Spacing::Overlap(1))
                .areas(body_area);

        Paragraph::new(format!(
            "{} emojis with more than {} occurrences",
            extremes.popular_count, extremes.threshold
        ))
        .block(
            Block::bordered()
                .title(View::Extremes.title())
                .merge_borders(MergeStrategy::Exact),
        )
        .render(header_area, buf);

        EmojiCard {
            label: "Most positive",
            record: extremes.most_positive,
        }
        .render(positive_area, buf);
        EmojiCard {
            label: "Most negative",
            record: extremes.most_negative,
        }
        .render(negative_area, buf);
    }
}

struct EmojiCard<'a> {
    label: &'a str,
    record: &'a EmojiRecord,
}

impl Widget for EmojiCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let record = self.record;
        let block = Block::bordered()
            .title(self.label)
            .merge_borders(MergeStrategy::Exact);
        let [text_area, chart_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Fill(1)])
                .areas(block.inner(area));

        let text = Paragraph::new(vec![
            Line::raw(format!("  {}  {}", record.char, record.unicode_name)),
            Line::raw(""),
            Line::styled(
                format!("  Sentiment:   {:+.3}", record.sentiment),
                sentiment_style(record.sentiment),
            ),
            Line::raw(format!("  Occurrences: {}", record.occurrences)),
            Line::raw(format!("  Position:    {:.3}", record.position)),
        ])
        .wrap(Wrap { trim: false });
        let chart = BarChart::new(vec![
            Bar::with_label("neg", scaled_bar(record.negative))
                .text_value(format!("{:.3}", record.negative))
                .style(NEGATIVE_STYLE),
            Bar::with_label("neut", scaled_bar(record.neutral))
                .text_value(format!("{:.3}", record.neutral)),
            Bar::with_label("pos", scaled_bar(record.positive))
                .text_value(format!("{:.3}", record.positive))
                .style(POSITIVE_STYLE),
        ])
        .max(scaled_bar(1.0))
        .bar_width(6)
        .bar_gap(2);

        block.render(area, buf);
        text.render(text_area, buf);
        chart.render(chart_area, buf);
    }
}

#[derive(Debug)]
pub struct PositionView<'a> {
    pub position: &'a AveragePosition,
}

impl Widget for PositionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let position = self.position;
        let stats = &position.stats;
        let block = Block::bordered().title(View::Position.title());
        let [text_area, chart_area] =
            Layout::horizontal([Constraint::Length(36), Constraint::Fill(1)])
                .areas(block.inner(area));

        let text = Paragraph::new(vec![
            Line::styled(
                format!("  Mean:   {:8.3}  {}", position.mean, position.band),
                SELECTED_STYLE,
            ),
            Line::raw(format!("  Median: {:8.3}", stats.median)),
            Line::raw(format!("  Min:    {:8.3}", stats.min)),
            Line::raw(format!("  Max:    {:8.3}", stats.max)),
            Line::raw(format!("  StdDev: {:8.3}", stats.std_dev)),
            Line::raw(format!("  Emojis: {:8}", stats.count)),
            Line::raw(""),
            Line::styled(
                format!(
                    "  BEGINNING < {} <= MIDDLE <= {} < END",
                    PositionBand::BEGINNING_BELOW,
                    PositionBand::END_ABOVE
                ),
                SEPARATOR_STYLE,
            ),
        ]);
        let chart = BarChart::new(
            [
                ("min", stats.min),
                ("median", stats.median),
                ("mean", stats.mean),
                ("max", stats.max),
            ]
            .into_iter()
            .map(|(label, value)| {
                Bar::with_label(label, scaled_bar(value)).text_value(format!("{value:.3}"))
            })
            .collect::<Vec<_>>(),
        )
        .max(scaled_bar(1.0))
        .direction(Direction::Horizontal)
        .bar_gap(1);

        block.render(area, buf);
        text.render(text_area, buf);
        chart.render(chart_area, buf);
    }
}

#[derive(Debug)]
pub struct PlacementView<'a> {
    pub placement: &'a PlacementComparison,
}

impl Widget for PlacementView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let placement = self.placement;
        let block = Block::bordered().title(View::Placement.title());
        let [text_area, chart_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Fill(1)])
                .areas(block.inner(area));

        let text = Paragraph::new(vec![
            Line::raw(format!(
                "  Positive mean position: {:.3}",
                placement.positive_mean
            )),
            Line::raw(format!(
                "  Negative mean position: {:.3}",
                placement.negative_mean
            )),
            Line::raw(format!("  Difference:             {:.3}", placement.difference)),
            Line::raw(""),
            Line::styled(format!("  {}", placement.verdict), SELECTED_STYLE),
        ]);
        let chart = BarChart::new(vec![
            Bar::with_label("Positive", scaled_bar(placement.positive_mean))
                .text_value(format!("{:.3}", placement.positive_mean))
                .style(POSITIVE_STYLE),
            Bar::with_label("Negative", scaled_bar(placement.negative_mean))
                .text_value(format!("{:.3}", placement.negative_mean))
                .style(NEGATIVE_STYLE),
        ])
        .max(scaled_bar(1.0))
        .direction(Direction::Horizontal)
        .bar_width(3)
        .bar_gap(1);

        block.render(area, buf);
        text.render(text_area, buf);
        chart.render(chart_area, buf);
    }
}
