use std::path::PathBuf;

use clap::{Parser, Subcommand};
use emosent_analysis::ReportParams;
use emosent_data::DEFAULT_DATA_FILE;

use crate::util::{self, LogTarget};

use self::{dashboard::DashboardArg, generate::GenerateArg, report::ReportArg};

mod dashboard;
mod generate;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Emoji sentiment CSV file
    #[arg(long, global = true, env = "EMOSENT_DATA", default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Browse the sentiment views in a TUI (default)
    Dashboard(#[clap(flatten)] DashboardArg),
    /// Print the sentiment views as text or JSON
    Report(#[clap(flatten)] ReportArg),
    /// Write a synthetic dataset in the source CSV layout
    Generate(#[clap(flatten)] GenerateArg),
}

impl Mode {
    fn log_target(&self) -> LogTarget {
        match self {
            Mode::Dashboard(arg) => arg.log_target(),
            Mode::Report(_) | Mode::Generate(_) => LogTarget::Stderr,
        }
    }
}

/// Parameters shared by the commands that compute metrics.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MetricArgs {
    /// Number of emojis in the top ranking
    #[arg(long, default_value_t = ReportParams::default().top_k)]
    top_k: usize,
    /// Emojis need strictly more occurrences than this to count as popular
    #[arg(long, default_value_t = ReportParams::default().popular_threshold)]
    popular_threshold: f64,
}

impl Default for MetricArgs {
    fn default() -> Self {
        let ReportParams {
            top_k,
            popular_threshold,
        } = ReportParams::default();
        Self {
            top_k,
            popular_threshold,
        }
    }
}

impl MetricArgs {
    pub(crate) fn params(&self) -> ReportParams {
        ReportParams {
            top_k: self.top_k,
            popular_threshold: self.popular_threshold,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Dashboard(DashboardArg::default()));
    util::init_tracing(&mode.log_target())?;
    match mode {
        Mode::Dashboard(arg) => dashboard::run(&args.data, &arg)?,
        Mode::Report(arg) => report::run(&args.data, &arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
