use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};

/// Scoring weights configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Bonus for membership in the common-noun lexicon
    #[serde(default = "default_common_membership")]
    pub common_membership: f64,

    /// Penalty for membership in the proper-noun lexicon (negative)
    #[serde(default = "default_proper_membership")]
    pub proper_membership: f64,

    /// Multiplier applied to the biased zipf frequency
    #[serde(default = "default_zipf_multiplier")]
    pub zipf_multiplier: f64,

    /// Offset added to the zipf frequency before weighting
    #[serde(default = "default_zipf_bias")]
    pub zipf_bias: f64,

    /// Word length (in characters) that neither helps nor hurts
    #[serde(default = "default_word_length_neutral")]
    pub word_length_neutral: usize,

    /// Cost per character of deviation from the neutral length
    #[serde(default = "default_word_length_multiplier")]
    pub word_length_multiplier: f64,

    /// Penalty for capitalized words, scaled by frequency; 0.0 disables it
    #[serde(default = "default_capitalization_penalty")]
    pub capitalization_penalty: f64,

    /// Zipf value below which the capitalization penalty vanishes
    #[serde(default = "default_capitalization_zipf_low")]
    pub capitalization_zipf_low: f64,

    /// Zipf span over which the capitalization penalty ramps to full strength
    #[serde(default = "default_capitalization_zipf_range")]
    pub capitalization_zipf_range: f64,

    /// Scores at or above this threshold are labeled likely ambiguous
    #[serde(default = "default_common_threshold")]
    pub common_threshold: f64,

    /// Scores at or below this floor are forced to likely non-ambiguous
    #[serde(default = "default_not_threshold")]
    pub not_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            common_membership: default_common_membership(),
            proper_membership: default_proper_membership(),
            zipf_multiplier: default_zipf_multiplier(),
            zipf_bias: default_zipf_bias(),
            word_length_neutral: default_word_length_neutral(),
            word_length_multiplier: default_word_length_multiplier(),
            capitalization_penalty: default_capitalization_penalty(),
            capitalization_zipf_low: default_capitalization_zipf_low(),
            capitalization_zipf_range: default_capitalization_zipf_range(),
            common_threshold: default_common_threshold(),
            not_threshold: default_not_threshold(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Validate a single value is a real number
    fn validate_finite(value: f64, name: &str) -> std::result::Result<(), String> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(format!("{} must be a finite number", name))
        }
    }

    // Pure function: Collect all weight validations
    fn collect_weight_validations(&self) -> Vec<std::result::Result<(), String>> {
        vec![
            Self::validate_finite(self.common_membership, "common_membership"),
            Self::validate_finite(self.proper_membership, "proper_membership"),
            Self::validate_finite(self.zipf_multiplier, "zipf_multiplier"),
            Self::validate_finite(self.zipf_bias, "zipf_bias"),
            Self::validate_finite(self.word_length_multiplier, "word_length_multiplier"),
            Self::validate_finite(self.capitalization_penalty, "capitalization_penalty"),
            Self::validate_finite(self.capitalization_zipf_low, "capitalization_zipf_low"),
            Self::validate_finite(self.capitalization_zipf_range, "capitalization_zipf_range"),
            Self::validate_finite(self.common_threshold, "common_threshold"),
            Self::validate_finite(self.not_threshold, "not_threshold"),
        ]
    }

    /// Validate that all weights are usable by the scorer
    pub fn validate(&self) -> std::result::Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }

        // The capitalization ramp divides by this span
        if self.capitalization_zipf_range <= 0.0 {
            return Err(format!(
                "capitalization_zipf_range must be positive, got {}",
                self.capitalization_zipf_range
            ));
        }

        Ok(())
    }
}

// Default weights for the word score; membership signals dominate frequency
fn default_common_membership() -> f64 {
    5.0 // Strong vote for known common nouns
}
fn default_proper_membership() -> f64 {
    -4.0 // Strong vote against known proper nouns
}
fn default_zipf_multiplier() -> f64 {
    0.9
}
fn default_zipf_bias() -> f64 {
    -4.0 // Centers the zipf scale so mid-frequency words score near zero
}
fn default_word_length_neutral() -> usize {
    7
}
fn default_word_length_multiplier() -> f64 {
    0.04 // Long words drift slightly toward non-ambiguous
}
fn default_capitalization_penalty() -> f64 {
    0.0 // Disabled by default
}
fn default_capitalization_zipf_low() -> f64 {
    2.0
}
fn default_capitalization_zipf_range() -> f64 {
    4.0
}
fn default_common_threshold() -> f64 {
    0.05
}
fn default_not_threshold() -> f64 {
    -40.0 // Hard floor that overrides the primary threshold
}

/// Corpus frequency configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyConfig {
    /// Enable zipf frequency lookups (off by default, every word scores 0.0)
    #[serde(default)]
    pub enabled: bool,

    /// Optional TSV table of `word<TAB>zipf` rows replacing the embedded one
    #[serde(default)]
    pub table: Option<PathBuf>,
}

/// Word list overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Replacement for the embedded common-noun list
    #[serde(default)]
    pub common: Option<PathBuf>,

    /// Replacement for the embedded proper-noun list
    #[serde(default)]
    pub proper: Option<PathBuf>,
}

/// Root configuration loaded from .ambiclass.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbiclassConfig {
    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub frequency: FrequencyConfig,

    #[serde(default)]
    pub lexicon: LexiconConfig,
}

pub const CONFIG_FILE_NAME: &str = ".ambiclass.toml";

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
fn parse_and_validate_config(contents: &str) -> std::result::Result<AmbiclassConfig, String> {
    let mut config = toml::from_str::<AmbiclassConfig>(contents)
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    if let Err(e) = config.scoring.validate() {
        eprintln!("Warning: Invalid scoring weights: {}. Using defaults.", e);
        config.scoring = ScoringWeights::default();
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<AmbiclassConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!(
                "Warning: {} in {}. Using defaults.",
                e,
                config_path.display()
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration.
///
/// With an explicit path the file must exist and parse; any failure is an
/// error. Without one, the nearest `.ambiclass.toml` in the current
/// directory or its ancestors is used, and problems fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AmbiclassConfig> {
    match explicit {
        Some(path) => load_explicit_config(path),
        None => Ok(discover_config()),
    }
}

fn load_explicit_config(path: &Path) -> Result<AmbiclassConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_and_validate_config(&contents)
        .map_err(|e| Error::configuration(format!("{} in {}", e, path.display())))
}

fn discover_config() -> AmbiclassConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return AmbiclassConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AmbiclassConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_documented_values() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.common_membership, 5.0);
        assert_eq!(weights.proper_membership, -4.0);
        assert_eq!(weights.zipf_multiplier, 0.9);
        assert_eq!(weights.zipf_bias, -4.0);
        assert_eq!(weights.word_length_neutral, 7);
        assert_eq!(weights.word_length_multiplier, 0.04);
        assert_eq!(weights.capitalization_penalty, 0.0);
        assert_eq!(weights.capitalization_zipf_low, 2.0);
        assert_eq!(weights.capitalization_zipf_range, 4.0);
        assert_eq!(weights.common_threshold, 0.05);
        assert_eq!(weights.not_threshold, -40.0);
    }

    #[test]
    fn test_partial_toml_fills_remaining_defaults() {
        let config = parse_and_validate_config(
            r#"
[scoring]
common_membership = 7.5
not_threshold = -10.0
"#,
        )
        .unwrap();
        assert_eq!(config.scoring.common_membership, 7.5);
        assert_eq!(config.scoring.not_threshold, -10.0);
        assert_eq!(config.scoring.zipf_multiplier, 0.9);
        assert!(!config.frequency.enabled);
        assert!(config.lexicon.common.is_none());
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, AmbiclassConfig::default());
    }

    #[test]
    fn test_invalid_toml_reports_parse_error() {
        let result = parse_and_validate_config("[scoring\ncommon_membership = 1.0");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to parse"));
    }

    #[test]
    fn test_unusable_weights_fall_back_to_defaults() {
        let config = parse_and_validate_config(
            r#"
[scoring]
capitalization_zipf_range = 0.0
"#,
        )
        .unwrap();
        assert_eq!(config.scoring, ScoringWeights::default());
    }

    #[test]
    fn test_validate_rejects_non_finite_weights() {
        let weights = ScoringWeights {
            zipf_multiplier: f64::NAN,
            ..ScoringWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_frequency_table_path_parses() {
        let config = parse_and_validate_config(
            r#"
[frequency]
enabled = true
table = "data/zipf.tsv"
"#,
        )
        .unwrap();
        assert!(config.frequency.enabled);
        assert_eq!(
            config.frequency.table,
            Some(PathBuf::from("data/zipf.tsv"))
        );
    }

    #[test]
    fn test_directory_ancestors_respects_depth_limit() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }
}
