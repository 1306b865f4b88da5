//! # Word Vocabulary

use std::collections::HashMap;

use crate::error::{LcResult, LexicodeError};
use crate::spanning::MAX_WORD_BYTES;

/// Default distinct-word capacity of a [`WordVocab`].
pub const DEFAULT_WORD_CAPACITY: usize = 5000;

/// A single dictionary entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    /// The word itself. Non-empty, ASCII alphanumeric, case-sensitive.
    pub word: String,

    /// Unique numeric value assigned when the word was first seen.
    pub value: u32,

    /// Times the word has been seen during forward encoding.
    pub frequency: u32,
}

/// In-memory word ↔ value dictionary.
///
/// Entries are kept in first-seen order, with hash indexes over both the
/// word and the value for each lookup direction. Values are assigned
/// `max(existing) + 1` at creation and never reused; removal is not
/// supported.
///
/// [`WordVocab::record_occurrence`] is the sole mutation entry point on
/// the encoding path. Decoding never touches a vocab mutably.
#[derive(Clone, Debug)]
pub struct WordVocab {
    entries: Vec<WordEntry>,
    word_index: HashMap<String, usize>,
    value_index: HashMap<u32, usize>,
    capacity: usize,
    // Tracked one past the stored maximum, as u64 so it cannot overflow.
    next_value: u64,
}

impl Default for WordVocab {
    fn default() -> Self {
        Self::new()
    }
}

impl WordVocab {
    /// An empty vocab with the [`DEFAULT_WORD_CAPACITY`] limit.
    pub fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_WORD_CAPACITY)
    }

    /// An empty vocab with an explicit distinct-word capacity.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            word_index: HashMap::new(),
            value_index: HashMap::new(),
            capacity,
            next_value: 1,
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocab holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The distinct-word capacity limit.
    pub fn capacity_limit(&self) -> usize {
        self.capacity
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Value of `word`, if present. Exact, case-sensitive match.
    pub fn lookup_value(
        &self,
        word: &str,
    ) -> Option<u32> {
        self.word_index.get(word).map(|&slot| self.entries[slot].value)
    }

    /// Word stored under `value`, if any.
    ///
    /// Takes a `u64` so that decoded base62 values can be probed directly;
    /// values beyond `u32` never match.
    pub fn lookup_word(
        &self,
        value: u64,
    ) -> Option<&str> {
        let value = u32::try_from(value).ok()?;
        self.value_index
            .get(&value)
            .map(|&slot| self.entries[slot].word.as_str())
    }

    /// Record one occurrence of `word`, returning its value.
    ///
    /// An existing word has its frequency bumped by one. A new word is
    /// appended with a freshly assigned value and frequency 1.
    ///
    /// ## Errors
    /// * [`LexicodeError::WordTooLong`] past the word byte limit.
    /// * [`LexicodeError::DictionaryFull`] at the distinct-word capacity.
    /// * [`LexicodeError::OutOfRange`] if the value space is exhausted.
    pub fn record_occurrence(
        &mut self,
        word: &str,
    ) -> LcResult<u32> {
        debug_assert!(
            !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphanumeric()),
            "words are non-empty ASCII alphanumeric runs: {word:?}"
        );
        if word.len() > MAX_WORD_BYTES {
            return Err(LexicodeError::WordTooLong {
                len: word.len(),
                max: MAX_WORD_BYTES,
            });
        }

        if let Some(&slot) = self.word_index.get(word) {
            let entry = &mut self.entries[slot];
            entry.frequency += 1;
            return Ok(entry.value);
        }

        let value =
            u32::try_from(self.next_value).map_err(|_| LexicodeError::OutOfRange {
                value: self.next_value,
                limit: u64::from(u32::MAX),
            })?;
        self.push_entry(WordEntry {
            word: word.to_string(),
            value,
            frequency: 1,
        })?;
        log::trace!("new word {word:?} assigned value {value}");
        Ok(value)
    }

    /// Append a fully formed entry, preserving all vocab invariants.
    ///
    /// This is the load-path constructor used by [`crate::vocab::io`];
    /// invariant violations surface as [`LexicodeError::CorruptDictionary`]
    /// since they can only come from a damaged record stream.
    pub fn push_entry(
        &mut self,
        entry: WordEntry,
    ) -> LcResult<()> {
        if self.entries.len() >= self.capacity {
            return Err(LexicodeError::DictionaryFull {
                capacity: self.capacity,
            });
        }
        if self.word_index.contains_key(&entry.word) {
            return Err(LexicodeError::corrupt(format!(
                "duplicate word {:?}",
                entry.word
            )));
        }
        if self.value_index.contains_key(&entry.value) {
            return Err(LexicodeError::corrupt(format!(
                "duplicate value {}",
                entry.value
            )));
        }

        self.next_value = self.next_value.max(u64::from(entry.value) + 1);

        let slot = self.entries.len();
        self.word_index.insert(entry.word.clone(), slot);
        self.value_index.insert(entry.value, slot);
        self.entries.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_monotonic_from_one() {
        let mut vocab = WordVocab::new();
        assert_eq!(vocab.record_occurrence("cat").unwrap(), 1);
        assert_eq!(vocab.record_occurrence("sat").unwrap(), 2);
        assert_eq!(vocab.record_occurrence("ran").unwrap(), 3);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_repeat_occurrence_bumps_frequency() {
        let mut vocab = WordVocab::new();
        vocab.record_occurrence("cat").unwrap();
        vocab.record_occurrence("cat").unwrap();
        vocab.record_occurrence("cat").unwrap();

        let entry = vocab.entries().next().unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.value, 1);
        assert_eq!(entry.frequency, 3);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut vocab = WordVocab::new();
        vocab.record_occurrence("Cat").unwrap();
        assert_eq!(vocab.lookup_value("Cat"), Some(1));
        assert_eq!(vocab.lookup_value("cat"), None);
    }

    #[test]
    fn test_lookup_word_by_value() {
        let mut vocab = WordVocab::new();
        vocab.record_occurrence("cat").unwrap();
        assert_eq!(vocab.lookup_word(1), Some("cat"));
        assert_eq!(vocab.lookup_word(2), None);
        // Values past u32 can never be stored.
        assert_eq!(vocab.lookup_word(u64::from(u32::MAX) + 1), None);
    }

    #[test]
    fn test_values_resume_past_loaded_maximum() {
        let mut vocab = WordVocab::new();
        vocab
            .push_entry(WordEntry {
                word: "old".to_string(),
                value: 41,
                frequency: 7,
            })
            .unwrap();
        assert_eq!(vocab.record_occurrence("new").unwrap(), 42);
    }

    #[test]
    fn test_capacity_limit() {
        let mut vocab = WordVocab::with_capacity_limit(2);
        vocab.record_occurrence("a").unwrap();
        vocab.record_occurrence("b").unwrap();
        // Existing words still record fine at capacity.
        assert_eq!(vocab.record_occurrence("a").unwrap(), 1);

        let err = vocab.record_occurrence("c").unwrap_err();
        assert!(matches!(
            err,
            LexicodeError::DictionaryFull { capacity: 2 }
        ));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_word_length_limit() {
        let mut vocab = WordVocab::new();
        let long = "x".repeat(MAX_WORD_BYTES + 1);
        let err = vocab.record_occurrence(&long).unwrap_err();
        assert!(matches!(err, LexicodeError::WordTooLong { .. }));
    }

    #[test]
    fn test_push_entry_rejects_duplicates() {
        let mut vocab = WordVocab::new();
        vocab.record_occurrence("cat").unwrap();

        let dup_word = WordEntry {
            word: "cat".to_string(),
            value: 9,
            frequency: 1,
        };
        assert!(vocab.push_entry(dup_word).is_err());

        let dup_value = WordEntry {
            word: "dog".to_string(),
            value: 1,
            frequency: 1,
        };
        assert!(vocab.push_entry(dup_value).is_err());
    }
}
