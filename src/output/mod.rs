//! Terminal output formatting
//!
//! Display utilities shared by the CLI commands.

pub mod display;

pub use display::{print_definitions, print_game_over, print_word_index};
