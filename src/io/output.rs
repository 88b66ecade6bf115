use crate::core::ExamReport;
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ExamReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ExamReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ExamReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "EXAM Scores".bold())?;
        writeln!(
            self.writer,
            "Reports aggregated: {}",
            report.reports_aggregated
        )?;
        writeln!(self.writer)?;

        for (technique, score) in &report.exam_scores {
            writeln!(
                self.writer,
                "  {:<24} {:.4}",
                technique.cyan(),
                score
            )?;
        }

        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(writer: W, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
