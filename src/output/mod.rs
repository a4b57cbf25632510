//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_letter_ranking, print_query_warning, print_starter_selection, print_substring_report,
};
