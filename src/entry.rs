//! `entry` — Module to normalize raw puzzle input into canonical entries.
//!
//! The input contract is deliberately loose: a JSON array of objects in
//! which the answer may live under any of several keys (`word`, `answer`,
//! `solution`, `text`, `entry`) and the clue likewise (`clue`, `question`,
//! `prompt`, `hint`, `definition`). Collaborating shells upload whatever
//! their users exported; this module is the single place where that mess
//! becomes a clean list.
//!
//! The normalization logic:
//! - For each object, take the first alias key present for the word and for
//!   the clue. Missing or non-string values coerce to the empty string.
//! - Uppercase the word and delete every character outside A–Z.
//! - Trim surrounding whitespace from the clue.
//! - Drop entries whose word is shorter than `min_word_len` or longer than
//!   `max_word_len`, and entries with an empty clue.
//!
//! Nothing is rejected silently across the API boundary: the caller either
//! receives a non-empty list or an error (`InvalidInputShape` when the
//! value is not an array of objects, `NoValidEntries` when the surviving
//! list is empty).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::PuzzleError;
use crate::puzzle::{MAX_WORD_LEN, MIN_WORD_LEN};

/// Accepted keys for the answer field, first present wins.
const WORD_KEYS: [&str; 5] = ["word", "answer", "solution", "text", "entry"];
/// Accepted keys for the clue field, first present wins.
const CLUE_KEYS: [&str; 5] = ["clue", "question", "prompt", "hint", "definition"];

/// One cleaned (answer, clue) pair, immutable after normalization.
///
/// `word` holds only uppercase A–Z and respects the configured length
/// bounds. `original_index` is the record's position in the raw input,
/// preserved for stable reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub clue: String,
    pub original_index: usize,
}

/// Length bounds applied during normalization.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    pub min_word_len: usize,
    pub max_word_len: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            min_word_len: MIN_WORD_LEN,
            max_word_len: MAX_WORD_LEN,
        }
    }
}

/// Pull the first alias key present out of `obj` as a string.
/// A present-but-non-string value coerces to "" rather than falling
/// through to the next alias.
fn field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| obj.get(*k))
        .map(|v| v.as_str().unwrap_or_default())
        .unwrap_or_default()
        .to_string()
}

/// Normalize a decoded JSON value into a non-empty entry list.
///
/// # Errors
///
/// Returns `InvalidInputShape` if `raw` is not an array of objects, and
/// `NoValidEntries` if every record is discarded by the cleanup rules.
pub fn normalize(raw: &Value, opts: &NormalizeOptions) -> Result<Vec<Entry>, PuzzleError> {
    let items = raw.as_array().ok_or(PuzzleError::InvalidInputShape)?;

    let mut entries = Vec::with_capacity(items.len());
    for (original_index, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or(PuzzleError::InvalidInputShape)?;

        let word: String = field(obj, &WORD_KEYS)
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .collect();
        let clue = field(obj, &CLUE_KEYS).trim().to_string();

        if word.len() < opts.min_word_len || word.len() > opts.max_word_len || clue.is_empty() {
            continue;
        }

        entries.push(Entry {
            word,
            clue,
            original_index,
        });
    }

    if entries.is_empty() {
        return Err(PuzzleError::NoValidEntries);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize_default(raw: &Value) -> Result<Vec<Entry>, PuzzleError> {
        normalize(raw, &NormalizeOptions::default())
    }

    #[test]
    fn test_strips_non_letters_and_uppercases() {
        let raw = json!([{"word": " co-op! ", "clue": "Shared venture"}]);
        let entries = normalize_default(&raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "COOP");
        assert_eq!(entries[0].clue, "Shared venture");
    }

    #[test]
    fn test_alias_keys_first_present_wins() {
        let raw = json!([
            {"answer": "otter", "hint": "River mammal"},
            {"solution": "heron", "definition": "Wading bird"},
            {"word": "crane", "answer": "ignored", "clue": "Tall bird"},
        ]);
        let entries = normalize_default(&raw).unwrap();

        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["OTTER", "HERON", "CRANE"]);
    }

    #[test]
    fn test_non_string_value_coerces_to_empty() {
        // `word` is present but numeric, so it coerces to "" and the entry
        // is dropped; it must not fall through to the `answer` alias.
        let raw = json!([
            {"word": 123, "answer": "backup", "clue": "q"},
            {"word": "keep", "clue": "Retain"},
        ]);
        let entries = normalize_default(&raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "KEEP");
        assert_eq!(entries[0].original_index, 1);
    }

    #[test]
    fn test_trims_clue_whitespace() {
        let raw = json!([{"word": "ash", "clue": "  Fire leftover \n"}]);
        let entries = normalize_default(&raw).unwrap();

        assert_eq!(entries[0].clue, "Fire leftover");
    }

    #[test]
    fn test_discards_short_words_and_empty_clues() {
        let raw = json!([
            {"word": "A", "clue": "x"},
            {"word": "BC", "clue": ""},
            {"word": "ok", "clue": "Fine"},
        ]);
        let entries = normalize_default(&raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "OK");
        assert_eq!(entries[0].original_index, 2);
    }

    #[test]
    fn test_discards_overlong_words() {
        let raw = json!([
            {"word": "extraordinarily", "clue": "Way too long"},
            {"word": "plain", "clue": "Just right"},
        ]);
        let entries = normalize_default(&raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "PLAIN");
    }

    #[test]
    fn test_all_rejected_is_an_error() {
        let raw = json!([
            {"word": "A", "clue": "x"},
            {"word": "BC", "clue": ""},
            {"word": "123", "clue": "q"},
        ]);

        assert!(matches!(
            normalize_default(&raw),
            Err(PuzzleError::NoValidEntries)
        ));
    }

    #[test]
    fn test_non_array_input_is_an_error() {
        assert!(matches!(
            normalize_default(&json!({"word": "cat", "clue": "Feline"})),
            Err(PuzzleError::InvalidInputShape)
        ));
        assert!(matches!(
            normalize_default(&json!("cat")),
            Err(PuzzleError::InvalidInputShape)
        ));
    }

    #[test]
    fn test_non_object_item_is_an_error() {
        let raw = json!([{"word": "cat", "clue": "Feline"}, "loose string"]);

        assert!(matches!(
            normalize_default(&raw),
            Err(PuzzleError::InvalidInputShape)
        ));
    }

    #[test]
    fn test_extra_fields_ignored_and_order_preserved() {
        let raw = json!([
            {"word": "cat", "clue": "Feline", "theme": "pets", "score": 9},
            {"word": "dog", "clue": "Canine"},
        ]);
        let entries = normalize_default(&raw).unwrap();

        assert_eq!(entries[0].original_index, 0);
        assert_eq!(entries[1].original_index, 1);
        assert_eq!(entries[1].word, "DOG");
    }

    #[test]
    fn test_idempotent_modulo_wrapping() {
        let raw = json!([
            {"word": " re-entry ", "clue": " Second pass "},
            {"word": "spiral", "clue": "Coiled curve"},
        ]);
        let once = normalize_default(&raw).unwrap();

        // Feed the normalized output back through as JSON.
        let wrapped = serde_json::to_value(&once).unwrap();
        let twice = normalize_default(&wrapped).unwrap();

        let pairs = |es: &[Entry]| -> Vec<(String, String)> {
            es.iter().map(|e| (e.word.clone(), e.clue.clone())).collect()
        };
        assert_eq!(pairs(&once), pairs(&twice));
    }

    #[test]
    fn test_returned_words_are_canonical() {
        let raw = json!([
            {"word": "Émigré", "clue": "One who left"},
            {"word": "zig-zag", "clue": "Back and forth"},
        ]);
        let entries = normalize_default(&raw).unwrap();

        for e in &entries {
            assert!(e.word.len() >= 2);
            assert!(e.word.chars().all(|c| c.is_ascii_uppercase()));
            assert_eq!(e.clue, e.clue.trim());
            assert!(!e.clue.is_empty());
        }
        // Accents are not A–Z and get stripped.
        assert_eq!(entries[0].word, "MIGR");
        assert_eq!(entries[1].word, "ZIGZAG");
    }
}
