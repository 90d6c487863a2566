//! Simple interactive CLI mode
//!
//! Line-oriented hangman without the TUI. Same engine, same collaborators;
//! the dictionary lookup here is done inline after the game-over banner has
//! already been printed, so a slow or failing lookup cannot delay or change
//! the outcome message.

use crate::core::{Effect, Game, GameResult, GameStatus};
use crate::dictionary::Dictionary;
use crate::output::{print_definitions, print_game_over};
use crate::persistence::WordStore;
use crate::wordlists::{WordSource, fallback_word, pick_secret};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(
    lives: u8,
    source: Option<&dyn WordSource>,
    dictionary: Option<&dyn Dictionary>,
    store: Option<&dyn WordStore>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    h _ n g m a n                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time.");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    loop {
        let mut rng = rand::rng();
        let word = match source {
            Some(source) => pick_secret(source, &mut rng),
            None => fallback_word(&mut rng),
        };
        let mut game = Game::with_lives(word, lives);

        'game: loop {
            println!("────────────────────────────────────────────────────────────");
            println!("Word:  {}", spaced(&game.revealed()));
            println!("Lives: {} / {}", game.lives(), game.budget());
            if !game.wrong().is_empty() {
                let wrong: String = spaced(&game.wrong().iter().collect::<String>());
                println!("Wrong: {}", wrong.to_uppercase());
            }

            let input = get_user_input("Guess a letter")?.to_lowercase();

            let letter = match input.as_str() {
                "quit" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" => {
                    println!("\nNew word!\n");
                    break 'game;
                }
                text => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
                        _ => {
                            println!("Please enter a single letter.\n");
                            continue;
                        }
                    }
                }
            };

            if game.already_guessed(letter) {
                println!("You already tried '{letter}'.\n");
                continue;
            }

            let was_hit = game.word().contains(letter);
            let (next, effects) = game.guess(letter);
            game = next;

            if game.status() == GameStatus::InProgress {
                if was_hit {
                    println!("Yes, '{letter}' is in the word!\n");
                } else {
                    println!("No '{letter}' in the word.\n");
                }
                continue;
            }

            finish_game(&game, &effects, dictionary, store);

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    println!("\nNew word!\n");
                    break 'game;
                }
                _ => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Banner, persistence, and dictionary lookup for a finished game
///
/// The banner comes first; both collaborators are best-effort and cannot
/// change what was already shown. Only winning words go to the store, the
/// dictionary is consulted either way.
fn finish_game(
    game: &Game,
    effects: &[Effect],
    dictionary: Option<&dyn Dictionary>,
    store: Option<&dyn WordStore>,
) {
    for effect in effects {
        let Effect::GameOver { word, result } = effect;
        print_game_over(*result, word);

        if *result == GameResult::Won
            && let Some(store) = store
            && let Err(err) = store.save(word)
        {
            log::warn!("failed to persist {word:?}: {err:#}");
        }

        if let Some(dictionary) = dictionary {
            match dictionary.define(word) {
                Ok(entries) => print_definitions(&entries),
                Err(err) => log::warn!("dictionary lookup for {word:?} failed: {err:#}"),
            }
        }
    }

    // Show the full word on a win too
    if !effects.is_empty() {
        println!("Word:  {}", spaced(&game.word().text().to_uppercase()));
    }
}

/// Space out the letters of a mask or word for readability
fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
