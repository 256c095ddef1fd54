use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dii",
    version,
    about = "Dietary Inflammatory Index scoring for nutrition log exports"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a Cronometer or MyFitnessPal CSV export
    Score(ScoreCommand),
    /// Print the DII reference table
    Reference(ReferenceCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SourceArg {
    Auto,
    Cronometer,
    #[value(name = "myfitnesspal", alias = "mfp")]
    MyFitnessPal,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// CSV export to score
    pub path: PathBuf,
    /// Export format; detected from the header row by default
    #[arg(long, value_enum)]
    pub source: Option<SourceArg>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Number of top contributors to show per day (at least 1)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub top: Option<usize>,
    /// Config file to use instead of ./dii.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReferenceCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
