//! Letter frequency command
//!
//! Ranks letters by how often they appear across the full word list.

use crate::analysis::ranked_letters;
use crate::core::Word;

/// Result of ranking letters across a word list
pub struct LetterRanking {
    pub letters: Vec<(char, u32)>,
    pub word_count: usize,
}

/// Rank every letter in the word list by descending frequency
#[must_use]
pub fn rank_letters(words: &[Word]) -> LetterRanking {
    LetterRanking {
        letters: ranked_letters(words),
        word_count: words.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn ranking_carries_the_word_count() {
        let list = words(&["crane", "slate"]);

        let ranking = rank_letters(&list);
        assert_eq!(ranking.word_count, 2);
        assert_eq!(ranking.letters[0], ('a', 2));
    }

    #[test]
    fn ranking_twice_gives_identical_order() {
        let list = words(&["sheep", "sleep", "crane"]);

        let first = rank_letters(&list);
        let second = rank_letters(&list);
        assert_eq!(first.letters, second.letters);
    }

    #[test]
    fn empty_list_ranks_nothing() {
        let ranking = rank_letters(&[]);
        assert!(ranking.letters.is_empty());
        assert_eq!(ranking.word_count, 0);
    }
}
