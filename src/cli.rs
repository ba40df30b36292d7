use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ambiclass")]
#[command(about = "Word ambiguity classifier and gold-standard evaluator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a word list into likely ambiguous and likely proper nouns
    Classify {
        /// Input file with one word per line
        input: PathBuf,

        /// Output file for words usable as common nouns
        ambiguous_output: PathBuf,

        /// Output file for proper-noun-only words
        proper_output: PathBuf,

        /// Configuration file (defaults to the nearest .ambiclass.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Evaluate prediction files against a gold standard TSV
    Evaluate {
        /// Gold standard TSV with Word and Truth columns
        gold_standard: PathBuf,

        /// Prediction file of words classified as ambiguous/common
        ambiguous_predictions: PathBuf,

        /// Prediction file of words classified as proper
        proper_predictions: PathBuf,

        /// Write the report as JSON to this path
        #[arg(long = "json-report")]
        json_report: Option<PathBuf>,

        /// Omit per-word details from the JSON report
        #[arg(long = "summary-only")]
        summary_only: bool,

        /// Print up to N mismatched words per category
        #[arg(long = "show-mismatches", value_name = "N", default_value = "0")]
        show_mismatches: usize,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
