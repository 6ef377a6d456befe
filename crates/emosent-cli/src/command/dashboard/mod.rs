//! Interactive sentiment dashboard
//!
//! One tab per view. The table is loaded through a [`TableCache`] so that a
//! reload only rebuilds it when the source file has changed. While the TUI
//! owns the terminal, log events go to `--log-file` or are dropped.

use std::path::{Path, PathBuf};

use anyhow::Context;
use emosent_data::TableCache;

use crate::{command::MetricArgs, util::LogTarget};

use self::app::App;

mod app;
mod widgets;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DashboardArg {
    #[command(flatten)]
    pub(super) metrics: MetricArgs,
    /// Write log events to this file (discarded when omitted)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl DashboardArg {
    pub(super) fn log_target(&self) -> LogTarget {
        self.log_file
            .clone()
            .map_or(LogTarget::Discard, LogTarget::File)
    }
}

pub(crate) fn run(data: &Path, arg: &DashboardArg) -> anyhow::Result<()> {
    let cache = TableCache::new(data);

    eprintln!("Loading emojis from {}...", data.display());
    let table = cache
        .get()
        .with_context(|| format!("Failed to load emoji data: {}", data.display()))?;
    eprintln!("Loaded {} emojis", table.len());

    let mut terminal = ratatui::init();
    let app_result = App::new(cache, table, arg.metrics.params()).run(&mut terminal);
    ratatui::restore();
    app_result
}
