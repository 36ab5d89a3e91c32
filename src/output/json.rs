use super::report::ReportRow;
use super::ReportWriter;
use crate::errors::Result;
use std::io::Write;

pub struct JsonReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_report(&mut self, rows: &[ReportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
