//! Letter frequency analysis
//!
//! Counts every letter occurrence across a word list; repeats within a word
//! count each time.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Count each letter's occurrences across the whole word list
#[must_use]
pub fn letter_counts(words: &[Word]) -> FxHashMap<u8, u32> {
    let mut counts = FxHashMap::default();
    for word in words {
        for &letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

/// Letters ranked by descending frequency
///
/// Ties break alphabetically so repeated runs over the same list always
/// produce the same ranking.
///
/// # Examples
/// ```
/// use wordle_helper::analysis::ranked_letters;
/// use wordle_helper::core::Word;
///
/// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let ranking = ranked_letters(&words);
/// assert_eq!(ranking[0], ('a', 2));
/// assert_eq!(ranking[1], ('e', 2));
/// ```
#[must_use]
pub fn ranked_letters(words: &[Word]) -> Vec<(char, u32)> {
    let mut ranking: Vec<(char, u32)> = letter_counts(words)
        .into_iter()
        .map(|(letter, count)| (letter as char, count))
        .collect();

    ranking.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn total_count_equals_total_letters() {
        let list = words(&["sheep", "sleep", "creep", "gumbo"]);

        let counts = letter_counts(&list);
        let total: u32 = counts.values().sum();
        let letters: usize = list.iter().map(|w| w.text().len()).sum();

        assert_eq!(total as usize, letters);
    }

    #[test]
    fn repeats_within_a_word_count_each_time() {
        let list = words(&["sheep"]);

        let counts = letter_counts(&list);
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b's'), Some(&1));
    }

    #[test]
    fn empty_list_has_no_counts() {
        assert!(letter_counts(&[]).is_empty());
        assert!(ranked_letters(&[]).is_empty());
    }

    #[test]
    fn ranking_is_descending_with_alphabetical_ties() {
        let list = words(&["crane", "slate"]);

        let ranking = ranked_letters(&list);
        // a and e appear twice; the rest once, alphabetically
        assert_eq!(
            ranking,
            vec![
                ('a', 2),
                ('e', 2),
                ('c', 1),
                ('l', 1),
                ('n', 1),
                ('r', 1),
                ('s', 1),
                ('t', 1),
            ]
        );
    }

    #[test]
    fn ranking_is_idempotent() {
        let list = words(&["sheep", "sleep", "creep", "crane", "slate"]);

        let first = ranked_letters(&list);
        let second = ranked_letters(&list);
        assert_eq!(first, second);
    }
}
