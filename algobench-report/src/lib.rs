#![warn(missing_docs)]
//! AlgoBench Report - Output Generation
//!
//! Renders aggregated results in several formats:
//! - JSON (machine-readable, with run metadata)
//! - CSV (spreadsheet-compatible)
//! - Human-readable terminal tables grouped by shape and size

mod csv;
mod human;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use human::format_human_output;
pub use json::generate_json_report;
pub use report::{Report, ReportMeta, ReportRow, SCHEMA_VERSION, build_report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with full metadata
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl OutputFormat {
    /// Render `report` in this format
    pub fn render(self, report: &Report) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Human => Ok(format_human_output(report)),
            OutputFormat::Json => generate_json_report(report),
            OutputFormat::Csv => Ok(generate_csv_report(report)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
