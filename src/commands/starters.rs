//! Ideal start word command
//!
//! Selects the diversified top starting guesses from the word list.

use crate::analysis::ideal_starters;
use crate::core::Word;

/// Result of selecting starting guesses
pub struct StarterSelection {
    pub words: Vec<String>,
    /// How many unique-letter candidates were considered
    pub pool_size: usize,
}

/// Select the diversified top starting guesses
#[must_use]
pub fn select_starters(words: &[Word]) -> StarterSelection {
    let pool_size = words.iter().filter(|w| w.has_unique_letters()).count();
    let words = ideal_starters(words)
        .into_iter()
        .map(|word| word.text().to_string())
        .collect();

    StarterSelection { words, pool_size }
}
