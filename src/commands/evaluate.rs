use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::evaluation::{self, EvaluationReport};
use crate::io;
use crate::io::output::{JsonWriter, OutputWriter, TerminalWriter};

/// Configuration for the evaluate command
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub gold_standard: PathBuf,
    pub ambiguous_predictions: PathBuf,
    pub proper_predictions: PathBuf,
    pub json_report: Option<PathBuf>,
    pub summary_only: bool,
    pub show_mismatches: usize,
}

pub fn handle_evaluate(cmd: EvaluateConfig) -> Result<()> {
    let report = evaluation::evaluate_against_gold(
        &cmd.gold_standard,
        &cmd.ambiguous_predictions,
        &cmd.proper_predictions,
    )?;

    let stdout = std::io::stdout();
    let mut terminal = TerminalWriter::with_mismatch_limit(stdout.lock(), cmd.show_mismatches);
    terminal.write_report(&report)?;

    if let Some(path) = &cmd.json_report {
        write_json_report(path, &report, !cmd.summary_only)?;
    }

    Ok(())
}

fn write_json_report(path: &Path, report: &EvaluationReport, include_details: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            io::ensure_dir(parent)?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
    let mut writer = if include_details {
        JsonWriter::new(file)
    } else {
        JsonWriter::summary_only(file)
    };
    writer.write_report(report)?;
    log::info!("wrote JSON report to {}", path.display());

    Ok(())
}
