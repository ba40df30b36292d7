//! Corpus frequency lookups on the zipf scale
//!
//! Scores come from a word -> zipf table. Zipf values run from about 1
//! (rare) to 8 (extremely common); words absent from the table score 0.0.
//! Frequency data is optional: when disabled, or when a configured table
//! cannot be loaded, lookups degrade to the neutral constant instead of
//! failing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::config::FrequencyConfig;
use crate::core::Result;
use crate::io;

const ZIPF_TABLE: &str = include_str!("data/zipf_en.tsv");

static EMBEDDED: OnceLock<ZipfTable> = OnceLock::new();

/// Provider of corpus-frequency scores
pub trait FrequencySource {
    /// Zipf-scale frequency for a lowercase word, 0.0 when unknown
    fn zipf(&self, word: &str) -> f64;

    /// Whether real corpus data backs this source
    fn is_available(&self) -> bool;
}

/// Source used when frequency data is switched off; every lookup is neutral
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledFrequency;

impl FrequencySource for DisabledFrequency {
    fn zipf(&self, _word: &str) -> f64 {
        0.0
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Word frequency table parsed from `word<TAB>zipf` rows
#[derive(Debug, Clone, Default)]
pub struct ZipfTable {
    entries: HashMap<String, f64>,
}

impl ZipfTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(word, zipf)| (word.to_lowercase(), zipf))
                .collect(),
        }
    }

    /// Table built from the embedded English snapshot
    pub fn embedded() -> &'static ZipfTable {
        EMBEDDED.get_or_init(|| {
            let table = ZipfTable {
                entries: parse_zipf_table(ZIPF_TABLE),
            };
            log::debug!("loaded embedded zipf table: {} entries", table.len());
            table
        })
    }

    /// Load a table from a TSV file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = io::read_file(path)?;
        Ok(Self {
            entries: parse_zipf_table(&contents),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FrequencySource for ZipfTable {
    fn zipf(&self, word: &str) -> f64 {
        self.entries.get(word).copied().unwrap_or(0.0)
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Parse TSV rows, skipping comments, blanks, and malformed lines.
/// Keys are lowercased so lookups against lowercased words always match.
fn parse_zipf_table(text: &str) -> HashMap<String, f64> {
    let mut entries = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((word, value)) = line.split_once('\t') else {
            log::debug!("skipping zipf row without a tab: {:?}", line);
            continue;
        };
        match value.trim().parse::<f64>() {
            Ok(zipf) => {
                entries.insert(word.trim().to_lowercase(), zipf);
            }
            Err(_) => {
                log::debug!("skipping zipf row with a bad value: {:?}", line);
            }
        }
    }
    entries
}

/// Build the frequency source requested by the configuration.
///
/// An unloadable table degrades to the disabled source after a warning so
/// scoring keeps working without corpus data.
pub fn source_from_config(config: &FrequencyConfig) -> Box<dyn FrequencySource> {
    if !config.enabled {
        return Box::new(DisabledFrequency);
    }
    match &config.table {
        Some(path) => match ZipfTable::from_file(path) {
            Ok(table) => {
                log::debug!(
                    "loaded zipf table from {}: {} entries",
                    path.display(),
                    table.len()
                );
                Box::new(table)
            }
            Err(e) => {
                log::warn!("{}; continuing without frequency data", e);
                Box::new(DisabledFrequency)
            }
        },
        None => Box::new(ZipfTable::embedded().clone()),
    }
}
