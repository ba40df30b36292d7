pub mod output;

// Re-export writers for convenient access
pub use output::{JsonWriter, OutputWriter, TerminalWriter};

use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Read a word-list file: one word per line, trimmed, blank lines dropped
pub fn read_word_lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_file(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Write a word list, one word per line with a trailing newline
pub fn write_word_list(path: &Path, words: &[String]) -> Result<()> {
    let mut content = String::new();
    for word in words {
        content.push_str(word);
        content.push('\n');
    }
    write_file(path, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_word_lines_trims_and_drops_blanks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("words.txt");
        fs::write(&path, "bank\n  crane\t\n\n\nParis\n").unwrap();

        let words = read_word_lines(&path).unwrap();
        assert_eq!(words, vec!["bank", "crane", "Paris"]);
    }

    #[test]
    fn test_read_word_lines_missing_file_names_the_path() {
        let error = read_word_lines(Path::new("no/such/file.txt")).unwrap_err();
        assert!(error.to_string().contains("no/such/file.txt"));
    }

    #[test]
    fn test_write_word_list_one_word_per_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        write_word_list(&path, &["bank".to_string(), "crane".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "bank\ncrane\n");
    }

    #[test]
    fn test_write_word_list_empty_is_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");

        write_word_list(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
