pub mod csv;
pub mod json;
pub mod report;
pub mod terminal;

pub use self::csv::CsvReportWriter;
pub use json::JsonReportWriter;
pub use report::{build_rows, ReportRow, LOCATION_SEPARATOR, REPORT_HEADER};
pub use terminal::TerminalReportWriter;

use crate::core::AggregatedGroup;
use crate::errors::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Terminal,
}

impl OutputFormat {
    /// Default file extension, `None` for formats that only go to stdout.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Csv => Some("csv"),
            Self::Json => Some("json"),
            Self::Terminal => None,
        }
    }

    pub fn writes_file(&self) -> bool {
        self.extension().is_some()
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, rows: &[ReportRow]) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Csv => Box::new(CsvReportWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonReportWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalReportWriter::new(writer)),
    }
}

/// Render the full report for `groups` in memory.
pub fn render_report(groups: &[AggregatedGroup], format: OutputFormat) -> Result<Vec<u8>> {
    let rows = build_rows(groups);
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer).write_report(&rows)?;
    Ok(buffer)
}
