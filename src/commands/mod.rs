//! Command implementations
//!
//! One orchestration function per CLI operation, each returning a result
//! struct for the output layer to print.

pub mod letters;
pub mod starters;
pub mod substring;

pub use letters::{LetterRanking, rank_letters};
pub use starters::{StarterSelection, select_starters};
pub use substring::{QueryWarning, SubstringReport, find_matches};
