//! Word list builder
//!
//! Turns raw text fragments into the deduplicated working word list.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Build a deduplicated word list from raw text fragments
///
/// Each fragment is trimmed and validated; fragments that are not
/// five-letter words (navigation text, headings, empty strings) are skipped.
/// The first occurrence of a word wins, so the list order is deterministic
/// for a given fragment sequence.
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::build_word_list;
///
/// let words = build_word_list(["apple", "apple", "mango"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "apple");
/// assert_eq!(words[1].text(), "mango");
/// ```
pub fn build_word_list<I, S>(fragments: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();

    for fragment in fragments {
        let Ok(word) = Word::new(fragment.as_ref().trim()) else {
            continue;
        };
        if seen.insert(word.text().to_string()) {
            words.push(word);
        }
    }

    words
}
