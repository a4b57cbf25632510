//! Display functions for command results

use super::formatters::count_bar;
use crate::commands::{LetterRanking, QueryWarning, StarterSelection, SubstringReport};
use colored::Colorize;

/// How many matched words fit on one printed row
const WORDS_PER_ROW: usize = 8;

/// Print the letter frequency ranking
pub fn print_letter_ranking(ranking: &LetterRanking) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER FREQUENCY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nAcross {} words:", ranking.word_count);

    let max = ranking.letters.first().map_or(0, |&(_, count)| count);
    for &(letter, count) in &ranking.letters {
        println!(
            "   {}  [{}] {}",
            letter
                .to_ascii_uppercase()
                .to_string()
                .bright_yellow()
                .bold(),
            count_bar(count, max, 30).green(),
            count
        );
    }
}

/// Print the selected starting guesses
pub fn print_starter_selection(selection: &StarterSelection) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "IDEAL START WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if selection.words.is_empty() {
        println!("\nNo unique-letter candidates in the word list.");
        return;
    }

    println!(
        "\nFrom {} unique-letter candidates:",
        selection.pool_size
    );
    for (i, word) in selection.words.iter().enumerate() {
        println!(
            "  {:>2}. {}",
            i + 1,
            word.to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the words matching a substring query
pub fn print_substring_report(report: &SubstringReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUBSTRING MATCHES:".bright_cyan().bold(),
        report.query.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.matches.is_empty() {
        println!("\nNo words match '{}'", report.query);
        return;
    }

    println!("\n{} matching words:", report.matches.len());
    for row in report.matches.chunks(WORDS_PER_ROW) {
        println!("   {}", row.join("  "));
    }
}

/// Print a query validation warning
pub fn print_query_warning(warning: &QueryWarning) {
    println!("{} {}", "⚠".yellow().bold(), warning.to_string().yellow());
}
