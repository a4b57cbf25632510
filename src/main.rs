//! Wordle Helper - CLI
//!
//! Scrapes a five-letter word list and runs one analysis per invocation:
//! letter frequency, ideal starting guesses, or substring matching.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use wordle_helper::{
    commands::{find_matches, rank_letters, select_starters},
    core::Word,
    output::{
        print_letter_ranking, print_query_warning, print_starter_selection,
        print_substring_report,
    },
    wordlists::{FileWordSource, SiteWordSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Scrapes a five-letter word list and ranks letters, start words, and substring matches",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Load words from a newline-delimited file instead of scraping the site
    #[arg(short = 'w', long, global = true, value_name = "PATH")]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
#[command(rename_all = "snake_case")]
enum Commands {
    /// Print letters ranked by descending frequency across the word list
    HighProbable,

    /// Print the greedily-selected ideal starting guesses
    IdealStart,

    /// Print words whose letter counts exactly match the substring's
    SubstringMatch {
        /// Substring to match, at most 5 characters
        substring: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_ref())?;

    match cli.command {
        Commands::HighProbable => print_letter_ranking(&rank_letters(&words)),
        Commands::IdealStart => print_starter_selection(&select_starters(&words)),
        Commands::SubstringMatch { substring } => match find_matches(&words, &substring) {
            Ok(report) => print_substring_report(&report),
            Err(warning) => print_query_warning(&warning),
        },
    }

    Ok(())
}

/// Load the word list from the `-w` file if given, otherwise scrape the site
fn load_words(wordlist: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match wordlist {
        Some(path) => FileWordSource::new(path)
            .fetch_words()
            .with_context(|| format!("could not load word list from {}", path.display()))?,
        None => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            spinner.set_message("Fetching word list...");
            spinner.enable_steady_tick(Duration::from_millis(80));

            let result = SiteWordSource::default().fetch_words();
            spinner.finish_and_clear();
            result.context("could not fetch the word list")?
        }
    };

    if words.is_empty() {
        bail!("word list source produced no usable five-letter words");
    }

    Ok(words)
}
