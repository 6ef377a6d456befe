use std::{fmt, sync::Arc};

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use emosent_analysis::{
    ReportParams, average_position, extremes_above_threshold, overall_sentiment_split,
    placement_comparison, top_by_occurrences,
};
use emosent_data::{EmojiTable, TableCache};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Widget,
};
use tracing::warn;

use super::widgets::{
    ExtremesView, KeyBinding, KeyBindingDisplay, MetricErrorView, PlacementView, PositionView,
    SplitView, TopView, ViewTabs,
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["1-5", "←", "→"], "View"),
    (&["↑", "↓"], "Scroll"),
    (&["r"], "Reload"),
    (&["R"], "Force reload"),
    (&["q", "Esc"], "Quit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Split,
    Top,
    Extremes,
    Position,
    Placement,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::Split,
        Self::Top,
        Self::Extremes,
        Self::Position,
        Self::Placement,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Split => "Sentiment split",
            Self::Top => "Top emojis",
            Self::Extremes => "Extremes",
            Self::Position => "Position",
            Self::Placement => "Placement",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&v| v == self).unwrap_or(0)
    }

    /// View for a `1`-based tab number.
    fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[self.index().checked_sub(1).unwrap_or(Self::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Loaded,
    Reloaded,
    Unchanged,
    ReloadFailed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => write!(f, "loaded"),
            Self::Reloaded => write!(f, "reloaded"),
            Self::Unchanged => write!(f, "unchanged since last load"),
            Self::ReloadFailed(message) => {
                write!(f, "reload failed, showing previous data: {message}")
            }
        }
    }
}

#[derive(Debug)]
pub struct App {
    cache: TableCache,
    table: Arc<EmojiTable>,
    params: ReportParams,
    view: View,
    selected_top: usize,
    status: Status,
    exiting: bool,
}

impl App {
    pub fn new(cache: TableCache, table: Arc<EmojiTable>, params: ReportParams) -> Self {
        Self {
            cache,
            table,
            params,
            view: View::Split,
            selected_top: 0,
            status: Status::Loaded,
            exiting: false,
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.exiting {
            terminal.draw(|f| self.draw(f))?;
            self.handle_event(&event::read()?);
        }
        Ok(())
    }

    fn top_len(&self) -> usize {
        self.table.len().min(self.params.top_k)
    }

    fn draw(&self, frame: &mut Frame) {
        let [tabs_area, main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(ViewTabs { selected: self.view }, tabs_area);
        self.draw_view(frame, main_area);

        let status_style = match self.status {
            Status::ReloadFailed(_) => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::DarkGray),
        };
        frame.render_widget(Line::styled(self.status_line(), status_style), status_area);
        frame.render_widget(
            KeyBindingDisplay {
                bindings: KEY_BINDINGS,
            },
            help_area,
        );
    }

    fn draw_view(&self, frame: &mut Frame, area: Rect) {
        let table = &*self.table;
        let params = &self.params;
        let buf = frame.buffer_mut();
        let view = self.view;
        let result = match view {
            View::Split => overall_sentiment_split(table)
                .map(|split| SplitView { split: &split }.render(area, buf)),
            View::Top => top_by_occurrences(table, params.top_k).map(|top| {
                TopView {
                    top: &top,
                    selected: self.selected_top,
                }
                .render(area, buf);
            }),
            View::Extremes => extremes_above_threshold(table, params.popular_threshold)
                .map(|extremes| ExtremesView { extremes: &extremes }.render(area, buf)),
            View::Position => average_position(table)
                .map(|position| PositionView { position: &position }.render(area, buf)),
            View::Placement => placement_comparison(table)
                .map(|placement| PlacementView { placement: &placement }.render(area, buf)),
        };
        if let Err(error) = result {
            MetricErrorView {
                view,
                error: &error,
            }
            .render(area, buf);
        }
    }

    fn status_line(&self) -> String {
        let modified = self.cache.cached_modified().map_or_else(
            || "unknown".to_owned(),
            |time| {
                DateTime::<Local>::from(time)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            },
        );
        format!(
            " {} | {} emojis | modified {modified} | {}",
            self.cache.path().display(),
            self.table.len(),
            self.status
        )
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(key) = event.as_key_press_event() {
            self.handle_key_event(key);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.exiting = true,
            KeyCode::Char('r') => self.reload(false),
            KeyCode::Char('R') => self.reload(true),
            KeyCode::Char(c) => {
                if let Some(view) = c.to_digit(10).and_then(View::from_number) {
                    self.view = view;
                }
            }
            KeyCode::Right | KeyCode::Tab => self.view = self.view.next(),
            KeyCode::Left | KeyCode::BackTab => self.view = self.view.prev(),
            KeyCode::Up if self.view == View::Top => {
                self.selected_top = self.selected_top.saturating_sub(1);
            }
            KeyCode::Down if self.view == View::Top => {
                let last = self.top_len().saturating_sub(1);
                self.selected_top = usize::min(self.selected_top + 1, last);
            }
            _ => {}
        }
    }

    /// Fetches the table through the cache; `force` drops the cached copy first.
    fn reload(&mut self, force: bool) {
        if force {
            self.cache.invalidate();
        }
        match self.cache.get() {
            Ok(table) => {
                self.status = if Arc::ptr_eq(&table, &self.table) {
                    Status::Unchanged
                } else {
                    Status::Reloaded
                };
                self.table = table;
                self.selected_top = self.selected_top.min(self.top_len().saturating_sub(1));
            }
            Err(e) => {
                warn!(
                    path = %self.cache.path().display(),
                    error = %e,
                    "failed to reload emoji data"
                );
                self.status = Status::ReloadFailed(e.to_string());
            }
        }
    }
}
