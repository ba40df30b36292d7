use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".ambiclass.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Ambiclass Configuration

[scoring]
common_membership = 5.0
proper_membership = -4.0
zipf_multiplier = 0.9
zipf_bias = -4.0
word_length_neutral = 7
word_length_multiplier = 0.04
capitalization_penalty = 0.0
capitalization_zipf_low = 2.0
capitalization_zipf_range = 4.0
common_threshold = 0.05
not_threshold = -40.0

[frequency]
enabled = false
# table = "path/to/zipf_table.tsv"

[lexicon]
# common = "path/to/common_words.txt"
# proper = "path/to/proper_words.txt"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .ambiclass.toml configuration file");

    Ok(())
}
