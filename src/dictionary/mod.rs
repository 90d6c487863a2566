//! Dictionary lookup
//!
//! Consumes the public dictionary API to show the player what the secret
//! word actually means. Treated as unreliable: every failure collapses to
//! "no data" at the caller.

mod client;
mod model;

pub use client::{DICTIONARY_API, Dictionary, DictionaryApi};
pub use model::{Definition, DictionaryEntry, Meaning};
