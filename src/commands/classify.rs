use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::classifier;
use crate::config;
use crate::frequency;
use crate::lexicon::Lexicon;
use crate::scoring::WordScorer;

/// Configuration for the classify command
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub input: PathBuf,
    pub ambiguous_output: PathBuf,
    pub proper_output: PathBuf,
    pub config: Option<PathBuf>,
}

pub fn handle_classify(cmd: ClassifyConfig) -> Result<()> {
    let config = config::load_config(cmd.config.as_deref())?;

    let lexicon = Lexicon::from_config(&config.lexicon)
        .context("Failed to load lexicon word lists")?;
    log::debug!(
        "lexicon ready: {} common, {} proper",
        lexicon.common_count(),
        lexicon.proper_count()
    );

    let frequency = frequency::source_from_config(&config.frequency);
    let scorer = WordScorer::new(&lexicon, frequency.as_ref(), config.scoring);

    classifier::classify_file(
        &scorer,
        &cmd.input,
        &cmd.ambiguous_output,
        &cmd.proper_output,
    )
    .with_context(|| format!("Failed to classify {}", cmd.input.display()))?;

    Ok(())
}
