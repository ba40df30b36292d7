//! Batch classification of word lists

use std::collections::BTreeSet;
use std::path::Path;

use crate::core::{Label, Result};
use crate::io;
use crate::scoring::WordScorer;

/// Split words into an ambiguous (common-noun) bucket and a proper bucket.
///
/// The label from the scorer is advisory; lexicon facts settle ties. A word
/// lands in the ambiguous bucket when it either scored as likely ambiguous
/// or sits in the common-noun list, unless the proper-noun list claims it,
/// which always wins. Everything else, including words the classifier has
/// no evidence about, goes to the proper bucket.
///
/// Both buckets come back de-duplicated and in ascending lexicographic
/// order. Blank entries are dropped.
pub fn classify_words<I, S>(scorer: &WordScorer, words: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lexicon = scorer.lexicon();
    let mut ambiguous = BTreeSet::new();
    let mut proper = BTreeSet::new();

    for raw in words {
        let result = scorer.score(raw.as_ref());
        if result.word.is_empty() || result.label == Label::Unknown {
            continue;
        }

        let treat_as_common =
            result.label == Label::LikelyAmbiguous || lexicon.contains_common(&result.word);
        let treat_as_proper = lexicon.contains_proper(&result.word);

        if treat_as_common && !treat_as_proper {
            ambiguous.insert(result.word);
        } else {
            proper.insert(result.word);
        }
    }

    (
        ambiguous.into_iter().collect(),
        proper.into_iter().collect(),
    )
}

/// Classify a word-list file and write both buckets, one word per line.
pub fn classify_file(
    scorer: &WordScorer,
    input: &Path,
    ambiguous_output: &Path,
    proper_output: &Path,
) -> Result<()> {
    let words = io::read_word_lines(input)?;
    let (ambiguous, proper) = classify_words(scorer, &words);
    log::info!(
        "classified {} words from {}: {} ambiguous, {} proper",
        words.len(),
        input.display(),
        ambiguous.len(),
        proper.len()
    );
    io::write_word_list(ambiguous_output, &ambiguous)?;
    io::write_word_list(proper_output, &proper)?;
    Ok(())
}
