pub mod bar;
pub mod json;
pub mod md;

use crate::error::GaugeError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Bar,
    Md,
    Json,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, GaugeError> {
    match format {
        OutputFormat::Bar => Ok(bar::to_bar(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(GaugeError::Json),
    }
}
