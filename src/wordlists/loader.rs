//! Word list loading from local files
//!
//! Newline-delimited word files are run through the same builder pipeline as
//! scraped fragments, so invalid lines are skipped rather than rejected.

use super::{SourceError, WordSource, build_word_list};
use crate::core::Word;
use std::fs;
use std::path::{Path, PathBuf};

/// Word source backed by a newline-delimited text file
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileWordSource {
    fn fetch_words(&self) -> Result<Vec<Word>, SourceError> {
        load_from_file(&self.path)
    }
}

/// Load words from a file
///
/// Returns the deduplicated word list, skipping any invalid lines.
///
/// # Errors
///
/// Returns `SourceError::Io` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SourceError> {
    let content = fs::read_to_string(path)?;
    Ok(build_word_list(content.lines()))
}
