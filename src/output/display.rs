//! Pretty-printing for CLI output

use crate::core::GameResult;
use crate::dictionary::DictionaryEntry;
use colored::Colorize;

/// Print dictionary entries the way the word page lays them out:
/// headword, phonetic, then numbered definitions grouped by part of speech.
pub fn print_definitions(entries: &[DictionaryEntry]) {
    for entry in entries {
        println!("\n{}", entry.word.bright_white().bold());
        if let Some(phonetic) = &entry.phonetic {
            println!("{}", phonetic.bright_black());
        }
        println!("{}", "─".repeat(40).bright_black());

        for meaning in &entry.meanings {
            println!("\n{}", meaning.part_of_speech.bright_cyan().bold());
            for (i, def) in meaning.definitions.iter().enumerate() {
                println!("  {}. {}", i + 1, def.definition);
                if let Some(example) = &def.example {
                    println!("     {}", format!("Example: {example}").italic().dimmed());
                }
            }
        }
        println!();
    }
}

/// Print the collected words as an index grouped by first letter
pub fn print_word_index(words: &[String]) {
    if words.is_empty() {
        println!("\n{}\n", "No words collected yet.".bright_black());
        return;
    }

    let mut current: Option<char> = None;
    for word in words {
        let initial = word
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?');
        if current != Some(initial) {
            println!("\n{}", initial.to_string().bright_cyan().bold());
            println!("{}", "─".repeat(20).bright_black());
            current = Some(initial);
        }
        println!("  {word}");
    }
    println!(
        "\n{}\n",
        format!("{} word(s)", words.len()).bright_black()
    );
}

/// Print the end-of-game banner
///
/// Shown regardless of what the dictionary or the word store are up to.
pub fn print_game_over(result: GameResult, word: &str) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match result {
        GameResult::Won => {
            println!("{}", "  You won!".bright_green().bold());
        }
        GameResult::Lost => {
            println!(
                "{} {}",
                "  You lost! The word was:".bright_red().bold(),
                word.to_uppercase().bright_white().bold()
            );
        }
    }
    println!("{}\n", "═".repeat(50).bright_cyan());
}
