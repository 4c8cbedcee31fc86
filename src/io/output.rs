use crate::core::FileReport;
use colored::*;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()>;
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
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# GCI Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Scanned: `{}`", report.path.display())?;
        writeln!(self.writer)?;

        if report.results.is_empty() {
            writeln!(self.writer, "No functions found.")?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "| Function | Coord (rank, mag, rate) | GCI Score |"
        )?;
        writeln!(
            self.writer,
            "|----------|-------------------------|-----------|"
        )?;
        for result in &report.results {
            writeln!(
                self.writer,
                "| {} | {} | {:.4} |",
                result.function_name,
                format_coordinate(result),
                result.gci_score
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Functions scanned: {}",
            report.summary.total_functions
        )?;
        writeln!(self.writer, "- Max GCI: {:.4}", report.summary.max_score)?;
        writeln!(
            self.writer,
            "- Average GCI: {:.4}",
            report.summary.average_score
        )?;
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

const RULE: &str = "------------------------------------------------------------";

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "\n{} {}",
            "Scanning:".bold().blue(),
            report.path.display()
        )?;
        writeln!(self.writer, "{RULE}")?;
        writeln!(
            self.writer,
            "{:<25} | {:<23} | {:<10}",
            "FUNCTION", "COORD (RANK, MAG, RATE)", "GCI SCORE"
        )?;
        writeln!(self.writer, "{RULE}")?;

        if report.results.is_empty() {
            writeln!(self.writer, "No functions found.")?;
            writeln!(self.writer, "{RULE}")?;
            return Ok(());
        }

        for result in &report.results {
            writeln!(
                self.writer,
                "{:<25} | {:<23} | {:<10.4}",
                result.function_name,
                format_coordinate(result),
                result.gci_score
            )?;
        }
        writeln!(self.writer, "{RULE}")?;

        writeln!(
            self.writer,
            "Functions scanned: {}",
            report.summary.total_functions
        )?;
        writeln!(self.writer, "Max GCI: {:.4}", report.summary.max_score)?;
        writeln!(
            self.writer,
            "Average GCI: {:.4}",
            report.summary.average_score
        )?;
        Ok(())
    }
}

fn format_coordinate(result: &crate::core::ScoreResult) -> String {
    format!(
        "({:.0}, {:.0}, {:.0})",
        result.coordinate.rank, result.coordinate.magnitude, result.coordinate.rate
    )
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    create_destination_writer(format, Box::new(std::io::stdout()))
}

pub fn create_destination_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{metrics, Coordinate, ScanDetails, ScoreResult};
    use std::path::PathBuf;

    fn sample_report() -> FileReport {
        let results = vec![ScoreResult {
            function_name: "bubble_sort".to_string(),
            coordinate: Coordinate {
                rank: 2.0,
                magnitude: 14.0,
                rate: 2.0,
            },
            gci_score: 3.4414,
            details: ScanDetails {
                nested_loops: 2,
                instruction_estimate: 14,
                recursive: false,
            },
        }];
        let summary = metrics::summarize(&results);
        FileReport {
            path: PathBuf::from("sample.py"),
            results,
            summary,
        }
    }

    fn empty_report() -> FileReport {
        FileReport {
            path: PathBuf::from("empty.py"),
            results: vec![],
            summary: metrics::summarize(&[]),
        }
    }

    #[test]
    fn test_terminal_writer_renders_fixed_width_table() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("FUNCTION"));
        assert!(rendered.contains("COORD (RANK, MAG, RATE)"));
        assert!(rendered.contains("GCI SCORE"));
        assert!(rendered.contains("bubble_sort"));
        assert!(rendered.contains("(2, 14, 2)"));
        assert!(rendered.contains("3.4414"));
        assert!(rendered.contains("Functions scanned: 1"));
    }

    #[test]
    fn test_terminal_writer_reports_empty_files() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&empty_report())
            .unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("No functions found."));
    }

    #[test]
    fn test_json_writer_round_trips() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let back: FileReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(back, sample_report());
    }

    #[test]
    fn test_markdown_writer_renders_table_and_summary() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert!(rendered.contains("# GCI Analysis Report"));
        assert!(rendered.contains("| bubble_sort | (2, 14, 2) | 3.4414 |"));
        assert!(rendered.contains("- Max GCI: 3.4414"));
    }
}
