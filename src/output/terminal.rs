use super::report::{ReportRow, REPORT_HEADER};
use super::ReportWriter;
use crate::errors::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

pub struct TerminalReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn build_table(rows: &[ReportRow]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(REPORT_HEADER.to_vec());
        for row in rows {
            table.add_row(row.fields().to_vec());
        }
        table
    }
}

impl<W: Write> ReportWriter for TerminalReportWriter<W> {
    fn write_report(&mut self, rows: &[ReportRow]) -> Result<()> {
        writeln!(self.writer, "{}", "Repeated class patterns".bold())?;
        if rows.is_empty() {
            writeln!(self.writer, "No patterns met the reporting thresholds.")?;
            return Ok(());
        }

        writeln!(self.writer, "{}", Self::build_table(rows))?;
        let instances: usize = rows.iter().map(|r| r.num_instances).sum();
        writeln!(
            self.writer,
            "{} patterns, {} instances",
            rows.len(),
            instances
        )?;
        Ok(())
    }
}
