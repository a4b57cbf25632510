//! Exact-count substring matching
//!
//! A word matches a query only when, for every letter in the query, the word
//! contains that letter at exactly the query's count. "ee" therefore matches
//! words with precisely two e's and never words with one or three.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Words whose letter counts exactly equal the query's, sorted
///
/// The query is lowercased before counting. Characters outside ASCII can
/// never match since words are ASCII by construction.
///
/// # Examples
/// ```
/// use wordle_helper::analysis::exact_count_matches;
/// use wordle_helper::core::Word;
///
/// let words = vec![Word::new("sheep").unwrap(), Word::new("crane").unwrap()];
/// assert_eq!(exact_count_matches(&words, "ee"), ["sheep"]);
/// assert!(exact_count_matches(&words, "eee").is_empty());
/// ```
#[must_use]
pub fn exact_count_matches(words: &[Word], query: &str) -> Vec<String> {
    let query = query.to_lowercase();

    let mut query_counts: FxHashMap<char, u8> = FxHashMap::default();
    for ch in query.chars() {
        *query_counts.entry(ch).or_insert(0) += 1;
    }

    let mut matches: Vec<String> = words
        .iter()
        .filter(|word| {
            let word_counts = word.letter_counts();
            query_counts.iter().all(|(&ch, &wanted)| {
                ch.is_ascii() && word_counts.get(&(ch as u8)).copied() == Some(wanted)
            })
        })
        .map(|word| word.text().to_string())
        .collect();

    matches.sort_unstable();
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn double_letter_query_matches_exact_doubles() {
        let list = words(&["sheep", "sleep", "creep"]);

        // Each has exactly two e's
        assert_eq!(exact_count_matches(&list, "ee"), ["creep", "sheep", "sleep"]);
    }

    #[test]
    fn triple_letter_query_matches_nothing() {
        let list = words(&["sheep", "sleep", "creep"]);

        assert!(exact_count_matches(&list, "eee").is_empty());
    }

    #[test]
    fn count_must_be_exact_not_covering() {
        // eerie has three e's, so a two-e query must not match it
        let list = words(&["eerie", "sheep"]);

        assert_eq!(exact_count_matches(&list, "ee"), ["sheep"]);
        assert_eq!(exact_count_matches(&list, "eee"), ["eerie"]);
    }

    #[test]
    fn multi_letter_query_checks_every_letter() {
        let list = words(&["sheep", "sleep", "creep"]);

        // s:1 and e:2 -> sheep and sleep, not creep
        assert_eq!(exact_count_matches(&list, "see"), ["sheep", "sleep"]);
        // h:1, s:1, e:2 -> sheep only
        assert_eq!(exact_count_matches(&list, "hsee"), ["sheep"]);
    }

    #[test]
    fn query_is_lowercased() {
        let list = words(&["sheep"]);

        assert_eq!(exact_count_matches(&list, "EE"), ["sheep"]);
    }

    #[test]
    fn results_are_sorted() {
        let list = words(&["sleep", "creep", "sheep"]);

        assert_eq!(exact_count_matches(&list, "ee"), ["creep", "sheep", "sleep"]);
    }

    #[test]
    fn non_ascii_query_matches_nothing() {
        let list = words(&["sheep"]);

        assert!(exact_count_matches(&list, "é").is_empty());
    }
}
