mod analyze;
mod cli;
mod config;
mod error;
mod logging;
mod normalize;
mod reference;
mod report;
mod scoring;
mod table;
mod types;

use crate::error::DiiError;
use crate::normalize::SourceHint;
use crate::reference::ReferenceTable;
use crate::types::config::ReportFormatSetting;
use clap::Parser;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run(cli: cli::Cli) -> Result<i32, DiiError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            if !cmd.path.exists() {
                return Err(DiiError::PathNotFound(cmd.path.display().to_string()));
            }

            let loaded = config::load_config(cmd.config.as_deref())?;

            let source = match cmd.source {
                Some(cli::SourceArg::Auto) => SourceHint::Auto,
                Some(cli::SourceArg::Cronometer) => SourceHint::Cronometer,
                Some(cli::SourceArg::MyFitnessPal) => SourceHint::MyFitnessPal,
                None => loaded.source(),
            };
            let output_format = match (cmd.format, loaded.format()) {
                (Some(cli::ReportFormat::Json), _) => report::OutputFormat::Json,
                (Some(cli::ReportFormat::Md), _) => report::OutputFormat::Md,
                (None, Some(ReportFormatSetting::Json)) => report::OutputFormat::Json,
                (None, Some(ReportFormatSetting::Md)) | (None, None) => report::OutputFormat::Md,
            };
            let settings = analyze::ReportSettings {
                top: cmd.top.unwrap_or_else(|| loaded.top()),
                thresholds: loaded.thresholds(),
            };

            let table = table::RawTable::from_path(&cmd.path)?;
            info!(path = %cmd.path.display(), columns = table.headers.len(), "read export");
            let normalized = normalize::normalize(&table, source)?;

            let score_report = analyze::analyze(&normalized, ReferenceTable::builtin(), &settings);
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Reference(cmd) => {
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render_reference(ReferenceTable::builtin(), output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_rejection() {
                exit_code::INPUT_REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
