//! Core domain types
//!
//! The validated five-letter word every other module operates on.

mod word;

pub use word::{Word, WordError};
