//! Evaluation of classifier output against a hand-labeled gold standard
//!
//! The gold standard is a TSV file with `Word` and `Truth` columns in any
//! order; extra columns are ignored. Predictions are the two word-list
//! files the classifier writes. Comparing them yields a confusion matrix
//! over the words both sides know about, plus bookkeeping for words only
//! one side mentions.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::io;

/// Normalized gold label
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Truth {
    Common,
    Proper,
}

impl Truth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Truth::Common => "common",
            Truth::Proper => "proper",
        }
    }

    /// Normalize a raw `Truth` cell.
    ///
    /// Accepts a few historical spellings per label, case-insensitively.
    /// Anything else is a hard error so silently mislabeled gold data
    /// cannot skew the metrics.
    pub fn parse(label: &str) -> Result<Self> {
        match label.trim().to_lowercase().as_str() {
            "common" | "ambiguous" | "ambiguous noun" => Ok(Truth::Common),
            "proper" | "proper noun" => Ok(Truth::Proper),
            _ => Err(Error::UnrecognizedLabel {
                label: label.to_string(),
            }),
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate metrics describing how predictions line up with the gold standard
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EvaluationReport {
    pub total_words: usize,
    pub total_common: usize,
    pub total_proper: usize,
    pub predicted_common: usize,
    pub predicted_proper: usize,
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub accuracy: f64,
    /// `None` when no word was predicted common, rendered as null/n-a
    pub precision: Option<f64>,
    /// `None` when the gold standard has no common words
    pub recall: Option<f64>,
    /// `None` when either input metric is absent or both are zero
    pub f1: Option<f64>,
    /// Gold words absent from both prediction files
    pub missing_words: Vec<String>,
    pub false_positive_words: Vec<String>,
    pub false_negative_words: Vec<String>,
    /// Predicted common words the gold standard does not mention
    pub extra_common_predictions: Vec<String>,
    /// Predicted proper words the gold standard does not mention
    pub extra_proper_predictions: Vec<String>,
}

/// Serializable view of a report. The word-list details are optional;
/// their counts are always present so a summary still sizes the gaps.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub total_words: usize,
    pub total_common: usize,
    pub total_proper: usize,
    pub predicted_common: usize,
    pub predicted_proper: usize,
    pub true_positive: usize,
    pub true_negative: usize,
    pub false_positive: usize,
    pub false_negative: usize,
    pub accuracy: f64,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
    pub missing_words_count: usize,
    pub extra_common_predictions_count: usize,
    pub extra_proper_predictions_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_words: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_positive_words: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub false_negative_words: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_common_predictions: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_proper_predictions: Option<&'a [String]>,
}

impl EvaluationReport {
    /// Borrowing view for serialization, with or without the word lists
    pub fn as_view(&self, include_details: bool) -> ReportView<'_> {
        ReportView {
            total_words: self.total_words,
            total_common: self.total_common,
            total_proper: self.total_proper,
            predicted_common: self.predicted_common,
            predicted_proper: self.predicted_proper,
            true_positive: self.true_positive,
            true_negative: self.true_negative,
            false_positive: self.false_positive,
            false_negative: self.false_negative,
            accuracy: self.accuracy,
            precision: self.precision,
            recall: self.recall,
            f1: self.f1,
            missing_words_count: self.missing_words.len(),
            extra_common_predictions_count: self.extra_common_predictions.len(),
            extra_proper_predictions_count: self.extra_proper_predictions.len(),
            missing_words: include_details.then(|| self.missing_words.as_slice()),
            false_positive_words: include_details.then(|| self.false_positive_words.as_slice()),
            false_negative_words: include_details.then(|| self.false_negative_words.as_slice()),
            extra_common_predictions: include_details
                .then(|| self.extra_common_predictions.as_slice()),
            extra_proper_predictions: include_details
                .then(|| self.extra_proper_predictions.as_slice()),
        }
    }
}

/// Compare classifier outputs against a gold standard TSV file.
///
/// Words the gold standard does not mention are set aside as extras and
/// never enter the confusion matrix. Gold words absent from both
/// prediction files count as missing; a missing gold-common word still
/// shows up as a false negative, so `true_positive + false_negative`
/// always equals `total_common`.
pub fn evaluate_against_gold(
    gold_standard: &Path,
    ambiguous_predictions: &Path,
    proper_predictions: &Path,
) -> Result<EvaluationReport> {
    let gold_labels = load_gold_labels(gold_standard)?;
    let gold_words: HashSet<String> = gold_labels.keys().cloned().collect();
    let gold_common: HashSet<String> = gold_labels
        .iter()
        .filter(|(_, truth)| **truth == Truth::Common)
        .map(|(word, _)| word.clone())
        .collect();
    let gold_proper: HashSet<String> = gold_words.difference(&gold_common).cloned().collect();

    let predicted_common_all = load_prediction_words(ambiguous_predictions)?;
    let predicted_proper_all = load_prediction_words(proper_predictions)?;

    let extra_common_predictions: HashSet<String> = predicted_common_all
        .difference(&gold_words)
        .cloned()
        .collect();
    let extra_proper_predictions: HashSet<String> = predicted_proper_all
        .difference(&gold_words)
        .cloned()
        .collect();

    let predicted_common: HashSet<String> = predicted_common_all
        .intersection(&gold_words)
        .cloned()
        .collect();
    let predicted_proper: HashSet<String> = predicted_proper_all
        .intersection(&gold_words)
        .cloned()
        .collect();

    // Only overlap among gold words is contradictory evidence; a stray
    // word in both files would land in both extras lists instead.
    let mut overlapping: Vec<String> = predicted_common
        .intersection(&predicted_proper)
        .cloned()
        .collect();
    if !overlapping.is_empty() {
        overlapping.sort();
        let preview = overlapping
            .iter()
            .take(5)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::OverlappingPredictions {
            count: overlapping.len(),
            preview,
        });
    }

    let missing_words: HashSet<String> = gold_words
        .iter()
        .filter(|word| !predicted_common.contains(*word) && !predicted_proper.contains(*word))
        .cloned()
        .collect();

    let true_positive_words: HashSet<String> =
        gold_common.intersection(&predicted_common).cloned().collect();
    let false_negative_words: HashSet<String> =
        gold_common.difference(&predicted_common).cloned().collect();
    let false_positive_words: HashSet<String> =
        predicted_common.intersection(&gold_proper).cloned().collect();
    let true_negative_words: HashSet<String> =
        gold_proper.intersection(&predicted_proper).cloned().collect();

    let total_words = gold_words.len();
    let true_positive = true_positive_words.len();
    let true_negative = true_negative_words.len();
    let false_positive = false_positive_words.len();
    let false_negative = false_negative_words.len();

    let accuracy = if total_words > 0 {
        (true_positive + true_negative) as f64 / total_words as f64
    } else {
        0.0
    };
    let precision = ratio(true_positive, true_positive + false_positive);
    let recall = ratio(true_positive, true_positive + false_negative);
    let f1 = match (precision, recall) {
        (Some(p), Some(r)) if p + r > 0.0 => Some(2.0 * p * r / (p + r)),
        _ => None,
    };

    Ok(EvaluationReport {
        total_words,
        total_common: gold_common.len(),
        total_proper: gold_proper.len(),
        predicted_common: predicted_common.len(),
        predicted_proper: predicted_proper.len(),
        true_positive,
        true_negative,
        false_positive,
        false_negative,
        accuracy,
        precision,
        recall,
        f1,
        missing_words: sort_words(missing_words),
        false_positive_words: sort_words(false_positive_words),
        false_negative_words: sort_words(false_negative_words),
        extra_common_predictions: sort_words(extra_common_predictions),
        extra_proper_predictions: sort_words(extra_proper_predictions),
    })
}

/// Header indices for the two required gold columns
#[derive(Clone, Copy, Debug)]
struct GoldHeader {
    word: usize,
    truth: usize,
}

impl GoldHeader {
    fn parse(line: &str, path: &Path) -> Result<Self> {
        let mut word = None;
        let mut truth = None;
        for (index, name) in line.split('\t').enumerate() {
            match name {
                "Word" => word = Some(index),
                "Truth" => truth = Some(index),
                _ => {}
            }
        }
        match (word, truth) {
            (Some(word), Some(truth)) => Ok(Self { word, truth }),
            _ => Err(Error::missing_gold_columns(path)),
        }
    }
}

/// Parse the gold standard TSV into word -> normalized truth.
///
/// Rows with an empty `Word` cell are skipped. Repeated words are fine as
/// long as their labels agree after normalization; a disagreement is a
/// hard error naming both labels.
fn load_gold_labels(path: &Path) -> Result<HashMap<String, Truth>> {
    let contents = io::read_file(path)?;
    let mut lines = contents.lines().map(trim_line_ending);

    let header = match lines.next() {
        Some(line) => GoldHeader::parse(line, path)?,
        None => return Err(Error::missing_gold_columns(path)),
    };

    let mut labels: HashMap<String, Truth> = HashMap::new();
    for line in lines {
        let cells: Vec<&str> = line.split('\t').collect();
        let word = cells.get(header.word).map_or("", |cell| cell.trim());
        if word.is_empty() {
            continue;
        }
        let truth_raw = cells.get(header.truth).map_or("", |cell| cell.trim());
        let truth = Truth::parse(truth_raw)?;
        if let Some(existing) = labels.get(word) {
            if *existing != truth {
                return Err(Error::ConflictingLabels {
                    word: word.to_string(),
                    first: existing.as_str().to_string(),
                    second: truth.as_str().to_string(),
                });
            }
        }
        labels.insert(word.to_string(), truth);
    }
    Ok(labels)
}

fn load_prediction_words(path: &Path) -> Result<HashSet<String>> {
    Ok(io::read_word_lines(path)?.into_iter().collect())
}

/// Strip a trailing carriage return so CRLF files parse like LF ones
fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator > 0 {
        Some(numerator as f64 / denominator as f64)
    } else {
        None
    }
}

/// Sort words case-insensitively, using the literal string as tiebreak so
/// "Apple" and "apple" have a stable relative order.
fn sort_words(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut sorted: Vec<String> = words.into_iter().collect();
    sorted.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    sorted
}
