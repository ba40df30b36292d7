pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifier verdict for a single word
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Label {
    #[serde(rename = "likely ambiguous")]
    LikelyAmbiguous,
    #[serde(rename = "likely non-ambiguous")]
    LikelyNonAmbiguous,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::LikelyAmbiguous => "likely ambiguous",
            Label::LikelyNonAmbiguous => "likely non-ambiguous",
            Label::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scoring outcome for a single word
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    /// The trimmed word that was scored
    pub word: String,
    pub label: Label,
    pub score: f64,
    /// Diagnostic summary of the dominant signals, not part of the contract
    pub reason: String,
}

impl ClassificationResult {
    pub fn new(
        word: impl Into<String>,
        label: Label,
        score: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            label,
            score,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display_matches_serialized_form() {
        assert_eq!(Label::LikelyAmbiguous.to_string(), "likely ambiguous");
        assert_eq!(Label::LikelyNonAmbiguous.to_string(), "likely non-ambiguous");
        assert_eq!(Label::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_label_serializes_with_spaces() {
        let json = serde_json::to_string(&Label::LikelyNonAmbiguous).unwrap();
        assert_eq!(json, r#""likely non-ambiguous""#);
    }
}
