//! Gallows
//!
//! Terminal hangman with dictionary lookup. The engine is a pure state
//! machine; word sourcing, dictionary lookups, and word persistence are
//! injectable collaborators that run strictly outside it.
//!
//! # Quick Start
//!
//! ```rust
//! use gallows::core::{Game, GameStatus, SecretWord};
//!
//! let word = SecretWord::new("ferris").unwrap();
//! let game = Game::new(word);
//!
//! // Each guess returns a new state plus any effects to run
//! let (game, effects) = game.guess('e');
//! assert!(effects.is_empty());
//! assert_eq!(game.revealed(), "_e____");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core game engine
pub mod core;

// Word sourcing
pub mod wordlists;

// External collaborators
pub mod dictionary;
pub mod persistence;

// Effect execution outside the pure engine
pub mod effects;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
