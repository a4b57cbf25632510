//! Word list scraping
//!
//! One HTTP GET against the configured page, then extraction of the text of
//! every list item that carries no `class` attribute. The page marks its
//! word entries that way; navigation and footer items all carry classes.

use super::{SourceConfig, SourceError, WordSource, build_word_list};
use crate::core::Word;
use scraper::{Html, Selector};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Word source backed by the public word list page
pub struct SiteWordSource {
    config: SourceConfig,
}

impl SiteWordSource {
    #[must_use]
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl Default for SiteWordSource {
    fn default() -> Self {
        Self::new(SourceConfig::default())
    }
}

impl WordSource for SiteWordSource {
    fn fetch_words(&self) -> Result<Vec<Word>, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&self.config.user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let html = client
            .get(&self.config.url)
            .send()?
            .error_for_status()?
            .text()?;

        let fragments = extract_list_items(&html)?;
        Ok(build_word_list(fragments))
    }
}

/// Pull the text of every class-less `<li>` out of the page markup
fn extract_list_items(html: &str) -> Result<Vec<String>, SourceError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("li:not([class])")
        .map_err(|e| SourceError::Parse(format!("bad list selector: {e}")))?;

    let items: Vec<String> = document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if items.is_empty() {
        return Err(SourceError::Parse(
            "no class-less list items found in page".to_string(),
        ));
    }

    Ok(items)
}
