// Export modules for library usage
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod frequency;
pub mod io;
pub mod lexicon;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{ClassificationResult, Error, Label, Result};

pub use crate::classifier::{classify_file, classify_words};

pub use crate::config::{
    load_config, AmbiclassConfig, FrequencyConfig, LexiconConfig, ScoringWeights,
};

pub use crate::evaluation::{evaluate_against_gold, EvaluationReport, ReportView, Truth};

pub use crate::frequency::{source_from_config, DisabledFrequency, FrequencySource, ZipfTable};

pub use crate::io::output::{JsonWriter, OutputWriter, TerminalWriter};

pub use crate::lexicon::Lexicon;

pub use crate::scoring::WordScorer;
