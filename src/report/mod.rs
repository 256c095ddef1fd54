pub mod json;
pub mod md;

use crate::error::DiiError;
use crate::reference::ReferenceTable;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, DiiError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(DiiError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_reference(
    reference: &ReferenceTable,
    format: OutputFormat,
) -> Result<String, DiiError> {
    match format {
        OutputFormat::Json => json::reference_to_json(reference).map_err(DiiError::Json),
        OutputFormat::Md => Ok(md::reference_to_markdown(reference)),
    }
}
