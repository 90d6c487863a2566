//! Secret word representation
//!
//! A `SecretWord` stores the word the player must guess, validated once at
//! construction and immutable for the rest of the game. The minimum-length
//! rule lives in the word selection policy, not here: the engine itself is
//! happy with any non-empty word.

use std::collections::BTreeSet;
use std::fmt;

/// Minimum length of a word the selection policy will hand to a new game
pub const MIN_WORD_LEN: usize = 5;

/// The placeholder glyph shown for letters not yet guessed
pub const MASK_GLYPH: char = '_';

/// A validated secret word: one or more lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NotLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NotLetters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// Input is trimmed and lower-cased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed input is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use gallows::core::SecretWord;
    ///
    /// let word = SecretWord::new("Ferris").unwrap();
    /// assert_eq!(word.text(), "ferris");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("c4ndle").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NotLetters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false by construction, provided for completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    /// The set of distinct letters in the word
    ///
    /// The win condition is exactly "this set is covered by the correct
    /// guesses".
    #[must_use]
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.text.chars().collect()
    }

    /// Project the word through a set of revealed letters
    ///
    /// Each position shows its letter if that letter is in `revealed`,
    /// otherwise [`MASK_GLYPH`]. Recomputed from current state every call;
    /// the masked form is never stored anywhere.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use gallows::core::SecretWord;
    ///
    /// let word = SecretWord::new("llama").unwrap();
    /// let revealed: BTreeSet<char> = ['a'].into_iter().collect();
    /// assert_eq!(word.masked(&revealed), "__a_a");
    /// ```
    #[must_use]
    pub fn masked(&self, revealed: &BTreeSet<char>) -> String {
        self.text
            .chars()
            .map(|c| if revealed.contains(&c) { c } else { MASK_GLYPH })
            .collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("candle").unwrap();
        assert_eq!(word.text(), "candle");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("CANDLE").unwrap();
        assert_eq!(word.text(), "candle");

        let word2 = SecretWord::new("  CaNdLe ").unwrap();
        assert_eq!(word2.text(), "candle");
    }

    #[test]
    fn word_creation_short_words_accepted() {
        // Length policy is the selector's business, not the type's
        assert!(SecretWord::new("cat").is_ok());
        assert!(SecretWord::new("a").is_ok());
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(SecretWord::new(""), Err(WordError::Empty)));
        assert!(matches!(SecretWord::new("   "), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(SecretWord::new("c4ndle").is_err()); // Number
        assert!(SecretWord::new("can dle").is_err()); // Inner space
        assert!(SecretWord::new("candle!").is_err()); // Punctuation
        assert!(SecretWord::new("cañdle").is_err()); // Non-ASCII
    }

    #[test]
    fn word_contains() {
        let word = SecretWord::new("candle").unwrap();
        assert!(word.contains('c'));
        assert!(word.contains('e'));
        assert!(!word.contains('z'));
    }

    #[test]
    fn distinct_letters_deduplicates() {
        let word = SecretWord::new("llama").unwrap();
        let letters = word.distinct_letters();
        assert_eq!(letters.len(), 3);
        assert!(letters.contains(&'l'));
        assert!(letters.contains(&'a'));
        assert!(letters.contains(&'m'));
    }

    #[test]
    fn masked_hides_unguessed_positions() {
        let word = SecretWord::new("candle").unwrap();
        let none = BTreeSet::new();
        assert_eq!(word.masked(&none), "______");

        let some: BTreeSet<char> = ['c', 'e'].into_iter().collect();
        assert_eq!(word.masked(&some), "c____e");
    }

    #[test]
    fn masked_reveals_every_occurrence() {
        let word = SecretWord::new("llama").unwrap();
        let revealed: BTreeSet<char> = ['l'].into_iter().collect();
        assert_eq!(word.masked(&revealed), "ll___");
    }

    #[test]
    fn masked_ignores_letters_not_in_word() {
        let word = SecretWord::new("candle").unwrap();
        let revealed: BTreeSet<char> = ['x', 'z'].into_iter().collect();
        assert_eq!(word.masked(&revealed), "______");
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("candle").unwrap();
        assert_eq!(format!("{word}"), "candle");
    }
}
