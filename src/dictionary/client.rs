//! Dictionary lookup client

use super::model::DictionaryEntry;
use anyhow::{Context, Result};
use std::time::Duration;

/// Default dictionary API endpoint (English entries)
pub const DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can define words
///
/// Kept as a trait so shells and tests can inject fakes; the game never
/// talks to the network directly.
pub trait Dictionary {
    /// Look up a word, returning zero or more entries
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or a
    /// payload that does not match the documented shape. Callers treat any
    /// error as "no data available".
    fn define(&self, word: &str) -> Result<Vec<DictionaryEntry>>;
}

/// Client for the free dictionary API
pub struct DictionaryApi {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl DictionaryApi {
    /// Build a client against the default endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DICTIONARY_API)
    }

    /// Build a client against a custom endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .context("failed to build HTTP client for dictionary")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Dictionary for DictionaryApi {
    fn define(&self, word: &str) -> Result<Vec<DictionaryEntry>> {
        let url = format!("{}/{}", self.base_url, word);
        let entries = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("dictionary request for {word:?} failed"))?
            .error_for_status()
            .with_context(|| format!("dictionary has no entry for {word:?}"))?
            .json()
            .with_context(|| format!("dictionary returned a malformed payload for {word:?}"))?;

        Ok(entries)
    }
}
