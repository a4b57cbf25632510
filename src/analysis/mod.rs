//! Word list analyses
//!
//! Pure functions over `&[Word]`. Nothing in here touches the network or the
//! terminal, so every analysis can be exercised with a fixed word list.

pub mod frequency;
pub mod starters;
pub mod substring;

pub use frequency::{letter_counts, ranked_letters};
pub use starters::ideal_starters;
pub use substring::exact_count_matches;
