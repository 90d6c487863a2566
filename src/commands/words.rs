//! Browse the collected words
//!
//! Read side of the word store: fetch everything, then filter locally by
//! substring search or first letter. The list is small enough that filtering
//! on the client keeps the store interface to a single ordered fetch.

use crate::persistence::WordStore;

/// Fetch and filter the stored words for the `words` subcommand
///
/// Filters compose: a word must match both the search substring and the
/// first-letter filter when both are given. Matching is case-insensitive.
///
/// # Errors
///
/// Returns a message suitable for direct display when the store cannot be
/// reached.
pub fn list_words(
    store: &dyn WordStore,
    search: Option<&str>,
    starts_with: Option<char>,
) -> Result<Vec<String>, String> {
    let search = search.map(str::to_lowercase);
    let initial = starts_with.map(|c| c.to_ascii_lowercase());

    let words = store
        .list()
        .map_err(|err| format!("Could not fetch the word collection: {err:#}"))?;

    Ok(words
        .into_iter()
        .filter(|word| {
            let word = word.to_lowercase();
            search
                .as_deref()
                .is_none_or(|needle| word.contains(needle))
                && initial.is_none_or(|c| word.starts_with(c))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    struct FixedStore(Vec<&'static str>);

    impl WordStore for FixedStore {
        fn save(&self, _word: &str) -> Result<()> {
            Ok(())
        }

        fn list(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|w| (*w).to_string()).collect())
        }
    }

    struct BrokenStore;

    impl WordStore for BrokenStore {
        fn save(&self, _word: &str) -> Result<()> {
            Ok(())
        }

        fn list(&self) -> Result<Vec<String>> {
            anyhow::bail!("connection refused")
        }
    }

    fn store() -> FixedStore {
        FixedStore(vec!["candle", "canyon", "ember", "garden"])
    }

    #[test]
    fn no_filters_returns_everything_in_store_order() {
        let words = list_words(&store(), None, None).unwrap();
        assert_eq!(words, vec!["candle", "canyon", "ember", "garden"]);
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let words = list_words(&store(), Some("AN"), None).unwrap();
        assert_eq!(words, vec!["candle", "canyon"]);
    }

    #[test]
    fn starts_with_keeps_one_initial() {
        let words = list_words(&store(), None, Some('E')).unwrap();
        assert_eq!(words, vec!["ember"]);
    }

    #[test]
    fn filters_compose() {
        let words = list_words(&store(), Some("n"), Some('c')).unwrap();
        assert_eq!(words, vec!["candle", "canyon"]);

        let words = list_words(&store(), Some("zzz"), Some('c')).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn store_failure_is_a_displayable_error() {
        let err = list_words(&BrokenStore, None, None).unwrap_err();
        assert!(err.contains("connection refused"));
    }
}
