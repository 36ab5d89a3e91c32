use super::report::{ReportRow, REPORT_HEADER};
use super::ReportWriter;
use crate::errors::Result;
use std::io::Write;

pub struct CsvReportWriter<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(writer: W) -> Self {
        let writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        Self { writer }
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, rows: &[ReportRow]) -> Result<()> {
        self.writer.write_record(REPORT_HEADER)?;
        for row in rows {
            self.writer.write_record(row.fields())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
