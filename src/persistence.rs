//! Optional word persistence
//!
//! Best-effort upsert of winning words into a remote table keyed by the
//! word itself, plus the read side that backs the collected-words index.
//! Entirely optional: without the environment configuration the store is
//! simply absent, and a failed write is logged and forgotten.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Environment variable naming the REST endpoint of the word table
pub const STORE_URL_VAR: &str = "GALLOWS_STORE_URL";

/// Environment variable holding the API key, if the endpoint needs one
pub const STORE_KEY_VAR: &str = "GALLOWS_STORE_KEY";

const STORE_TIMEOUT: Duration = Duration::from_secs(10);

/// The collection of words from won games
pub trait WordStore {
    /// Upsert one lowercase word
    ///
    /// Idempotent: storing the same word twice has no additional effect.
    ///
    /// # Errors
    /// Returns an error if the write fails; callers log and move on.
    fn save(&self, word: &str) -> Result<()>;

    /// Fetch every stored word, ordered alphabetically
    ///
    /// # Errors
    /// Returns an error on transport failure or a malformed payload.
    fn list(&self) -> Result<Vec<String>>;
}

/// One row of the remote word table
#[derive(Debug, Deserialize)]
struct WordRow {
    word: String,
}

/// REST client for a deduplicated remote word table
///
/// Speaks the PostgREST convention: a POST with the ignore-duplicates
/// resolution header makes the insert an idempotent upsert on the table's
/// word key.
pub struct RestWordStore {
    client: reqwest::blocking::Client,
    url: String,
    api_key: Option<String>,
}

impl RestWordStore {
    /// Build a store from `GALLOWS_STORE_URL` / `GALLOWS_STORE_KEY`
    ///
    /// Returns `Ok(None)` when no URL is configured, which disables
    /// persistence altogether.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(url) = std::env::var(STORE_URL_VAR) else {
            return Ok(None);
        };
        let api_key = std::env::var(STORE_KEY_VAR).ok();
        Ok(Some(Self::new(url, api_key)?))
    }

    /// Build a store against an explicit endpoint
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(STORE_TIMEOUT)
            .build()
            .context("failed to build HTTP client for word store")?;

        Ok(Self {
            client,
            url: url.into(),
            api_key,
        })
    }
}

impl RestWordStore {
    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }
}

impl WordStore for RestWordStore {
    fn save(&self, word: &str) -> Result<()> {
        let request = self
            .client
            .post(&self.url)
            .header("Prefer", "resolution=ignore-duplicates")
            .json(&serde_json::json!([{ "word": word }]));

        self.authorize(request)
            .send()
            .with_context(|| format!("word store request for {word:?} failed"))?
            .error_for_status()
            .with_context(|| format!("word store rejected {word:?}"))?;

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let request = self
            .client
            .get(&self.url)
            .query(&[("select", "word"), ("order", "word")]);

        let rows: Vec<WordRow> = self
            .authorize(request)
            .send()
            .context("word store list request failed")?
            .error_for_status()
            .context("word store rejected the list request")?
            .json()
            .context("word store returned a malformed word list")?;

        Ok(rows.into_iter().map(|row| row.word).collect())
    }
}
