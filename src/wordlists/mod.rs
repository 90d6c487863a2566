//! Word sourcing for new games
//!
//! An external random-word service as the primary source, with an embedded
//! fallback list compiled into the binary.

mod embedded;
pub mod selection;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use selection::{RandomWordApi, WordSource, fallback_word, pick_secret};
