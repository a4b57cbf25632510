//! Wordle Helper
//!
//! Scrapes a five-letter word list from a public page and answers three
//! questions over it: which letters are most frequent, which words make the
//! best starting guesses, and which words match a substring's exact letter
//! counts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::analysis::ranked_letters;
//! use wordle_helper::core::Word;
//!
//! let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
//!
//! let ranking = ranked_letters(&words);
//! assert_eq!(ranking[0], ('a', 2));
//! ```

// Core domain types
pub mod core;

// Word list analyses
pub mod analysis;

// Word list sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
