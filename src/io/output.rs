use colored::*;
use std::io::Write;

use crate::evaluation::EvaluationReport;

pub trait OutputWriter {
    fn write_report(&mut self, report: &EvaluationReport) -> anyhow::Result<()>;
}

/// JSON rendering of a report; summary mode drops the word-list details
pub struct JsonWriter<W: Write> {
    writer: W,
    include_details: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            include_details: true,
        }
    }

    pub fn summary_only(writer: W) -> Self {
        Self {
            writer,
            include_details: false,
        }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&report.as_view(self.include_details))?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Console rendering of a report, one metric per line
pub struct TerminalWriter<W: Write> {
    writer: W,
    mismatch_limit: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            mismatch_limit: 0,
        }
    }

    /// Also list up to `limit` mismatched words per category
    pub fn with_mismatch_limit(writer: W, limit: usize) -> Self {
        Self {
            writer,
            mismatch_limit: limit,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Evaluation summary".bold())?;
        writeln!(self.writer, "Total words: {}", report.total_words)?;
        writeln!(self.writer, "Gold common: {}", report.total_common)?;
        writeln!(self.writer, "Gold proper: {}", report.total_proper)?;
        writeln!(self.writer, "Predicted common: {}", report.predicted_common)?;
        writeln!(self.writer, "Predicted proper: {}", report.predicted_proper)?;
        writeln!(self.writer, "Accuracy: {:.4}", report.accuracy)?;
        writeln!(
            self.writer,
            "Precision (common): {}",
            format_metric(report.precision)
        )?;
        writeln!(
            self.writer,
            "Recall (common): {}",
            format_metric(report.recall)
        )?;
        writeln!(self.writer, "F1 (common): {}", format_metric(report.f1))?;
        writeln!(self.writer, "True positives: {}", report.true_positive)?;
        writeln!(self.writer, "True negatives: {}", report.true_negative)?;
        writeln!(self.writer, "False positives: {}", report.false_positive)?;
        writeln!(self.writer, "False negatives: {}", report.false_negative)?;
        writeln!(
            self.writer,
            "Missing from predictions: {}",
            report.missing_words.len()
        )?;
        writeln!(
            self.writer,
            "Extra common predictions: {}",
            report.extra_common_predictions.len()
        )?;
        writeln!(
            self.writer,
            "Extra proper predictions: {}",
            report.extra_proper_predictions.len()
        )?;

        if self.mismatch_limit > 0 {
            self.write_examples("False positives", &report.false_positive_words)?;
            self.write_examples("False negatives", &report.false_negative_words)?;
            self.write_examples("Missing in outputs", &report.missing_words)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_examples(&mut self, title: &str, words: &[String]) -> anyhow::Result<()> {
        if words.is_empty() {
            return Ok(());
        }
        let shown = words
            .iter()
            .take(self.mismatch_limit)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let more = if words.len() <= self.mismatch_limit {
            String::new()
        } else {
            format!(" (and {} more)", words.len() - self.mismatch_limit)
        };
        writeln!(self.writer, "{}: {}{}", title, shown, more)?;
        Ok(())
    }
}

/// Render an optional metric, using n/a when it is undefined
fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.4}", value),
        None => "n/a".to_string(),
    }
}
