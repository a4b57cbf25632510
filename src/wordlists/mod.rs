//! Word list sources
//!
//! Everything that produces the working word list: the site scraper, the
//! file loader, and the builder that validates and deduplicates raw
//! fragments. Analyses never care where a list came from; they consume
//! `&[Word]` through the [`WordSource`] seam.

mod builder;
pub mod loader;
pub mod site;

pub use builder::build_word_list;
pub use loader::FileWordSource;
pub use site::SiteWordSource;

use crate::core::Word;
use std::fmt;
use std::io;

/// Page the five-letter word list is scraped from
pub const WORD_LIST_URL: &str = "https://eslforums.com/5-letter-words/";

/// Browser-like agent string sent with the page request
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Where and how to fetch the word list
///
/// `Default` supplies the production URL and User-Agent, so callers only
/// build one by hand to point at a different page.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub url: String,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: WORD_LIST_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// A producer of word lists
///
/// Implemented by [`SiteWordSource`] (HTTP scrape) and [`FileWordSource`]
/// (local file), selected by the CLI. Tests inject fixed lists instead of
/// going through a source at all.
pub trait WordSource {
    /// Produce the deduplicated word list
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the underlying source cannot be read
    /// or its content cannot be interpreted.
    fn fetch_words(&self) -> Result<Vec<Word>, SourceError>;
}

/// Error type for word list retrieval
#[derive(Debug)]
pub enum SourceError {
    /// The HTTP request failed (connection, status, or body read)
    Network(reqwest::Error),
    /// The page markup did not look like a word list
    Parse(String),
    /// A local word list file could not be read
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network request failed: {e}"),
            Self::Parse(msg) => write!(f, "unexpected page markup: {msg}"),
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Parse(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_word_list_page() {
        let config = SourceConfig::default();
        assert_eq!(config.url, WORD_LIST_URL);
        assert_eq!(config.user_agent, USER_AGENT);
    }

    #[test]
    fn source_error_display() {
        let err = SourceError::Parse("no list items".to_string());
        assert_eq!(err.to_string(), "unexpected page markup: no list items");
    }
}
