//! Word selection policy
//!
//! Produces the secret word for a new game: ask the external random-word
//! source for one word of minimum length, and on any kind of failure fall
//! back to a uniform pick from the embedded list. Selection never fails and
//! never surfaces an error to the player.

use super::embedded::FALLBACK;
use crate::core::{MIN_WORD_LEN, SecretWord};
use anyhow::{Context, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::Duration;

/// Default random-word service endpoint
pub const RANDOM_WORD_API: &str = "https://random-word-api.herokuapp.com";

/// Request timeout for the word source; bounds how long a new game can block
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// A source of random words
///
/// Implementations may fail; the selection policy treats every failure as
/// recoverable.
pub trait WordSource {
    /// Fetch one word of at least `min_len` letters
    ///
    /// # Errors
    /// Returns an error on transport failure, a malformed payload, or when
    /// the source cannot satisfy the length requirement.
    fn fetch(&self, min_len: usize) -> Result<String>;
}

/// Client for a random-word HTTP service
///
/// The service answers `GET {base}/word?number=1` with a JSON array of
/// words.
pub struct RandomWordApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RandomWordApi {
    /// Build a client against the default endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(RANDOM_WORD_API)
    }

    /// Build a client against a custom endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed to build HTTP client for word source")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl WordSource for RandomWordApi {
    fn fetch(&self, min_len: usize) -> Result<String> {
        let url = format!("{}/word?number=1", self.base_url);
        let words: Vec<String> = self
            .client
            .get(&url)
            .send()
            .context("word source request failed")?
            .error_for_status()
            .context("word source returned an error status")?
            .json()
            .context("word source returned a malformed payload")?;

        let word = words
            .into_iter()
            .next()
            .context("word source returned an empty list")?;

        if word.len() < min_len {
            anyhow::bail!("word source returned {word:?}, shorter than {min_len} letters");
        }

        Ok(word)
    }
}

/// Pick the secret word for a new game
///
/// Tries `source` once; if it errors or hands back something that does not
/// validate as a playable word of at least [`MIN_WORD_LEN`] letters, logs
/// the failure and picks from the embedded list instead. The result is
/// always lowercase.
pub fn pick_secret<R: Rng + ?Sized>(source: &dyn WordSource, rng: &mut R) -> SecretWord {
    match source.fetch(MIN_WORD_LEN) {
        Ok(raw) => match SecretWord::new(&raw) {
            Ok(word) if word.len() >= MIN_WORD_LEN => return word,
            Ok(word) => {
                log::warn!("word source returned {:?}, too short to play", word.text());
            }
            Err(err) => log::warn!("word source returned unusable word {raw:?}: {err}"),
        },
        Err(err) => log::warn!("word source failed: {err:#}"),
    }

    fallback_word(rng)
}

/// Pick uniformly from the embedded fallback list
pub fn fallback_word<R: Rng + ?Sized>(rng: &mut R) -> SecretWord {
    let raw = FALLBACK.choose(rng).expect("fallback list is non-empty");
    SecretWord::new(*raw).expect("fallback words are valid")
}
