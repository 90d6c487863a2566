//! Standalone dictionary lookup command

use crate::dictionary::{Dictionary, DictionaryEntry};

/// Look up a word for the `define` subcommand
///
/// # Errors
///
/// Returns a message suitable for direct display when the word has no
/// entry or the lookup fails.
pub fn define_word(word: &str, dictionary: &dyn Dictionary) -> Result<Vec<DictionaryEntry>, String> {
    let word = word.trim().to_lowercase();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(format!("'{word}' is not a word I can look up"));
    }

    dictionary
        .define(&word)
        .map_err(|err| format!("No definitions found for '{word}': {err:#}"))
}
