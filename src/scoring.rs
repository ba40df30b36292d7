//! Per-word ambiguity scoring
//!
//! A word's score is an additive blend of lexicon membership, corpus
//! frequency, and shape signals. Positive scores lean toward "usable as a
//! common noun", negative toward "proper noun only". The thresholds that
//! turn a score into a label ride along in [`ScoringWeights`].

use crate::config::ScoringWeights;
use crate::core::{ClassificationResult, Label};
use crate::frequency::FrequencySource;
use crate::lexicon::Lexicon;

/// Scores single words against lexicon, frequency, and shape signals
pub struct WordScorer<'a> {
    lexicon: &'a Lexicon,
    frequency: &'a dyn FrequencySource,
    weights: ScoringWeights,
}

impl<'a> WordScorer<'a> {
    pub fn new(
        lexicon: &'a Lexicon,
        frequency: &'a dyn FrequencySource,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            lexicon,
            frequency,
            weights,
        }
    }

    /// The lexicon this scorer consults
    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// Score one word and decide its label.
    ///
    /// Whitespace is trimmed first; a word that trims to nothing comes back
    /// as [`Label::Unknown`] with an empty `word`. Signals are summed in a
    /// fixed order so equal inputs always produce identical results.
    pub fn score(&self, raw: &str) -> ClassificationResult {
        let word = raw.trim();
        if word.is_empty() {
            return ClassificationResult::new("", Label::Unknown, 0.0, "empty");
        }

        let weights = &self.weights;
        let lower = word.to_lowercase();
        let mut score = 0.0;

        if self.lexicon.contains_common(word) {
            score += weights.common_membership;
        }

        // An exact proper-list hit takes priority over the lowercase
        // fallback; the penalty is applied at most once.
        if self.lexicon.contains_proper_exact(word) {
            score += weights.proper_membership;
        } else if self.lexicon.contains_proper_lower(word) {
            score += weights.proper_membership;
        }

        let zipf = self.frequency.zipf(&lower);
        score += weights.zipf_multiplier * (zipf + weights.zipf_bias);

        let length_delta = word.chars().count() as i64 - weights.word_length_neutral as i64;
        score -= weights.word_length_multiplier * length_delta as f64;

        if weights.capitalization_penalty != 0.0 && starts_uppercase(word) {
            // Frequent capitalized words are the suspicious ones; rare
            // capitalized words escape the penalty entirely.
            let factor = if self.frequency.is_available() {
                ((zipf - weights.capitalization_zipf_low) / weights.capitalization_zipf_range)
                    .clamp(0.0, 1.0)
            } else {
                0.0
            };
            score -= weights.capitalization_penalty * factor;
        }

        let mut label = if score >= weights.common_threshold {
            Label::LikelyAmbiguous
        } else {
            Label::LikelyNonAmbiguous
        };
        if score <= weights.not_threshold {
            label = Label::LikelyNonAmbiguous;
        }

        let zipf_repr = if self.frequency.is_available() {
            format!("zipf={:.2}", zipf)
        } else {
            "zipf=n/a".to_string()
        };
        let reason = format!("{};len_delta={}", zipf_repr, length_delta);

        ClassificationResult::new(word, label, score, reason)
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_uppercase_checks_the_first_character_only() {
        assert!(starts_uppercase("Paris"));
        assert!(starts_uppercase("École"));
        assert!(!starts_uppercase("paris"));
        assert!(!starts_uppercase("pAris"));
        assert!(!starts_uppercase("7up"));
        assert!(!starts_uppercase(""));
    }
}
