//! Reference word lists backing the classifier
//!
//! Two lists, common nouns and proper nouns, each kept alongside a
//! lowercased variant so that a lowercase word can match a capitalized
//! entry. The embedded lists are parsed once per process; callers that
//! need different data build their own instance.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::LexiconConfig;
use crate::core::Result;
use crate::io;

const COMMON_WORDS: &str = include_str!("data/common_words.txt");
const PROPER_WORDS: &str = include_str!("data/proper_words.txt");

static EMBEDDED: OnceLock<Lexicon> = OnceLock::new();

/// Membership lists consulted by the scorer and the batch classifier
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    common: HashSet<String>,
    common_lower: HashSet<String>,
    proper: HashSet<String>,
    proper_lower: HashSet<String>,
}

impl Lexicon {
    pub fn new<C, P>(common: C, proper: P) -> Self
    where
        C: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        let common: HashSet<String> = common.into_iter().collect();
        let common_lower = common.iter().map(|w| w.to_lowercase()).collect();
        let proper: HashSet<String> = proper.into_iter().collect();
        let proper_lower = proper.iter().map(|w| w.to_lowercase()).collect();
        Self {
            common,
            common_lower,
            proper,
            proper_lower,
        }
    }

    /// Lexicon built from the embedded word lists
    pub fn embedded() -> &'static Lexicon {
        EMBEDDED.get_or_init(|| {
            let lexicon = Lexicon::new(
                parse_word_list(COMMON_WORDS),
                parse_word_list(PROPER_WORDS),
            );
            log::debug!(
                "loaded embedded lexicon: {} common, {} proper",
                lexicon.common_count(),
                lexicon.proper_count()
            );
            lexicon
        })
    }

    /// Load word lists from files.
    ///
    /// The common list is required. A missing proper list yields an empty
    /// proper set, matching how the lists ship: the proper list is an
    /// optional refinement.
    pub fn from_files(common: &Path, proper: Option<&Path>) -> Result<Self> {
        let common_words = io::read_word_lines(common)?;
        let proper_words = match proper {
            Some(path) if path.is_file() => io::read_word_lines(path)?,
            _ => Vec::new(),
        };
        Ok(Lexicon::new(common_words, proper_words))
    }

    /// Build the lexicon named by the configuration, mixing embedded lists
    /// with per-list file overrides.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        if config.common.is_none() && config.proper.is_none() {
            return Ok(Lexicon::embedded().clone());
        }
        let common = match &config.common {
            Some(path) => io::read_word_lines(path)?,
            None => parse_word_list(COMMON_WORDS),
        };
        let proper = match &config.proper {
            Some(path) if path.is_file() => io::read_word_lines(path)?,
            Some(_) => Vec::new(),
            None => parse_word_list(PROPER_WORDS),
        };
        Ok(Lexicon::new(common, proper))
    }

    /// Common-noun membership: exact, or a fully lowercase word matching
    /// the lowercased list.
    pub fn contains_common(&self, word: &str) -> bool {
        self.common.contains(word)
            || (is_all_lowercase(word) && self.common_lower.contains(word))
    }

    /// Proper-noun membership under either rule
    pub fn contains_proper(&self, word: &str) -> bool {
        self.contains_proper_exact(word) || self.contains_proper_lower(word)
    }

    /// Exact, case-sensitive proper-noun membership
    pub fn contains_proper_exact(&self, word: &str) -> bool {
        self.proper.contains(word)
    }

    /// Lowercase fallback: the word is entirely lowercase and matches the
    /// lowercased proper list.
    pub fn contains_proper_lower(&self, word: &str) -> bool {
        is_all_lowercase(word) && self.proper_lower.contains(word)
    }

    pub fn common_count(&self) -> usize {
        self.common.len()
    }

    pub fn proper_count(&self) -> usize {
        self.proper.len()
    }
}

/// Split an embedded list into trimmed, non-empty words
fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// True when the word has at least one lowercase character and no
/// uppercase ones, mirroring how the lowercase fallback is gated.
fn is_all_lowercase(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}
