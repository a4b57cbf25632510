//! Start-word ranking
//!
//! Scores non-repeating-letter words by summed letter frequency, then
//! greedily picks a diverse top list: each accepted word must share fewer
//! than [`MAX_SHARED_LETTERS`] letters with the previously accepted one.

use super::frequency::letter_counts;
use crate::core::Word;

/// Accepted words beyond this count end the selection
pub const SELECTION_TARGET: usize = 10;

/// A candidate sharing this many letters with the last accepted word is skipped
pub const MAX_SHARED_LETTERS: usize = 3;

/// Select a diverse list of high-scoring starting guesses
///
/// Only words with all-distinct letters are considered. Each candidate is
/// scored as the sum of its letters' frequencies across the candidate pool,
/// candidates are ranked by descending score (ties keep word list order),
/// and the ranked list is walked greedily: a candidate is accepted when it
/// shares fewer than [`MAX_SHARED_LETTERS`] distinct letters with the most
/// recently accepted word.
///
/// The target check runs before each candidate after the first, so the
/// selection can reach `SELECTION_TARGET + 1` entries. Empty input yields an
/// empty selection.
#[must_use]
pub fn ideal_starters(words: &[Word]) -> Vec<Word> {
    let candidates: Vec<Word> = words
        .iter()
        .filter(|word| word.has_unique_letters())
        .cloned()
        .collect();

    // Frequencies come from the candidate pool only, not the full list
    let counts = letter_counts(&candidates);

    let mut scored: Vec<(Word, u32)> = candidates
        .into_iter()
        .map(|word| {
            let score = word
                .chars()
                .iter()
                .map(|letter| counts.get(letter).copied().unwrap_or(0))
                .sum();
            (word, score)
        })
        .collect();

    // Stable sort: equal scores keep their word list order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut selected: Vec<Word> = Vec::new();
    for (word, _) in scored {
        let Some(last) = selected.last() else {
            selected.push(word);
            continue;
        };
        if selected.len() > SELECTION_TARGET {
            break;
        }
        if last.shared_letters(&word) < MAX_SHARED_LETTERS {
            selected.push(word);
        }
    }

    selected
}
