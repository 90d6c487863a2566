//! Core game engine
//!
//! The pure hangman state machine and its word type. No I/O, no clocks, no
//! dependencies beyond the standard library; everything in here is a total
//! function over its declared inputs.

mod game;
mod word;

pub use game::{DEFAULT_LIVES, Effect, Game, GameResult, GameStatus};
pub use word::{MASK_GLYPH, MIN_WORD_LEN, SecretWord, WordError};
