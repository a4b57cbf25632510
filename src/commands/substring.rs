//! Substring match command
//!
//! Validates the query, then filters the word list by exact letter counts.
//! A bad query is a warning to report, not an error to propagate; the
//! process still exits cleanly.

use crate::analysis::exact_count_matches;
use crate::core::Word;
use std::fmt;

/// Longest query the matcher accepts; words only have five letters
pub const MAX_QUERY_LEN: usize = 5;

/// User-facing warning for an unusable query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryWarning {
    Empty,
    TooLong(usize),
}

impl fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Substring cannot be empty."),
            Self::TooLong(len) => {
                write!(f, "Substring too long: {len} characters (max {MAX_QUERY_LEN}).")
            }
        }
    }
}

/// Result of a substring match
#[derive(Debug)]
pub struct SubstringReport {
    pub query: String,
    pub matches: Vec<String>,
}

/// Match the word list against a substring query
///
/// # Errors
///
/// Returns a [`QueryWarning`] when the query is empty or longer than
/// [`MAX_QUERY_LEN`] characters.
pub fn find_matches(words: &[Word], query: &str) -> Result<SubstringReport, QueryWarning> {
    let len = query.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(QueryWarning::TooLong(len));
    }
    if len == 0 {
        return Err(QueryWarning::Empty);
    }

    Ok(SubstringReport {
        query: query.to_lowercase(),
        matches: exact_count_matches(words, query),
    })
}
