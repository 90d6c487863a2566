//! Wire model of the dictionary API response
//!
//! Mirrors the payload of `api.dictionaryapi.dev` exactly: a list of
//! entries, each with an optional phonetic transcription and meanings
//! grouped by part of speech. Unknown fields are ignored so upstream
//! additions cannot break parsing.

use serde::{Deserialize, Serialize};

/// One dictionary entry for a looked-up word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

/// Senses of a word under one part of speech
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// A single definition, optionally with a usage example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed from a real api.dictionaryapi.dev response
    const FIXTURE: &str = r#"[
        {
            "word": "candle",
            "phonetic": "/ˈkæn.dəl/",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {
                            "definition": "A light source with a wick embedded in wax.",
                            "example": "She lit a candle."
                        },
                        {
                            "definition": "A unit of luminous intensity."
                        }
                    ]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [
                        {
                            "definition": "To check an egg by holding it against a light."
                        }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn parses_real_payload_shape() {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word, "candle");
        assert_eq!(entry.phonetic.as_deref(), Some("/ˈkæn.dəl/"));
        assert_eq!(entry.meanings.len(), 2);

        let noun = &entry.meanings[0];
        assert_eq!(noun.part_of_speech, "noun");
        assert_eq!(noun.definitions.len(), 2);
        assert_eq!(
            noun.definitions[0].example.as_deref(),
            Some("She lit a candle.")
        );
        assert!(noun.definitions[1].example.is_none());
    }

    #[test]
    fn missing_optional_fields_tolerated() {
        let json = r#"[{"word": "ember"}]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].word, "ember");
        assert!(entries[0].phonetic.is_none());
        assert!(entries[0].meanings.is_empty());
    }

    #[test]
    fn unknown_fields_ignored() {
        let json = r#"[{
            "word": "ember",
            "phonetics": [{"text": "/ˈɛm.bɚ/"}],
            "license": {"name": "CC", "url": "https://example.com"},
            "meanings": [{"partOfSpeech": "noun", "definitions": [], "synonyms": []}]
        }]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].meanings[0].part_of_speech, "noun");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        // The API reports unknown words as an object, not an array
        let json = r#"{"title": "No Definitions Found"}"#;
        assert!(serde_json::from_str::<Vec<DictionaryEntry>>(json).is_err());
    }
}
