//! # Forward Encoder

use core::str;

use crate::base62::encode_base62;
use crate::error::LcResult;
use crate::spanning::{SpanRef, SpanScanner};
use crate::vocab::WordVocab;

/// Forward (text → encoded) transformer.
///
/// Owns the vocab for the duration of a run and mutates it through
/// [`WordVocab::record_occurrence`]; reclaim it with
/// [`WordEncoder::into_vocab`] for persistence.
#[derive(Clone, Debug)]
pub struct WordEncoder {
    vocab: WordVocab,
}

impl WordEncoder {
    /// Build an encoder over `vocab`.
    pub fn new(vocab: WordVocab) -> Self {
        Self { vocab }
    }

    /// The vocab in its current state.
    pub fn vocab(&self) -> &WordVocab {
        &self.vocab
    }

    /// Consume the encoder, yielding the updated vocab.
    pub fn into_vocab(self) -> WordVocab {
        self.vocab
    }

    /// Encode `input`, appending to `output`.
    ///
    /// Separator bytes copy through unchanged. Each word is recorded in
    /// the vocab and replaced by the base62 rendering of its value; a word
    /// ending the stream is emitted without a trailing separator.
    pub fn encode_append(
        &mut self,
        input: &[u8],
        output: &mut Vec<u8>,
    ) -> LcResult<()> {
        for span in SpanScanner::new(input) {
            match span {
                SpanRef::Gap(range) => {
                    output.extend_from_slice(&input[range]);
                }
                SpanRef::Word(range) => {
                    // Word spans are ASCII alphanumeric, always valid UTF-8.
                    let word = str::from_utf8(&input[range]).unwrap();
                    let value = self.vocab.record_occurrence(word)?;
                    let rendered = encode_base62(u64::from(value))?;
                    output.extend_from_slice(rendered.as_bytes());
                }
            }
        }
        Ok(())
    }

    /// Encode `input` into a fresh buffer.
    pub fn encode(
        &mut self,
        input: &[u8],
    ) -> LcResult<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len());
        self.encode_append(input, &mut output)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanning::MAX_WORD_BYTES;

    fn encode_str(input: &str) -> (String, WordVocab) {
        let mut encoder = WordEncoder::new(WordVocab::new());
        let output = encoder.encode(input.as_bytes()).unwrap();
        (String::from_utf8(output).unwrap(), encoder.into_vocab())
    }

    #[test]
    fn test_encode_worked_example() {
        let (output, vocab) = encode_str("cat sat. cat ran.");
        assert_eq!(output, "1 2. 1 3.");
        assert_eq!(vocab.lookup_value("cat"), Some(1));
        assert_eq!(vocab.lookup_value("sat"), Some(2));
        assert_eq!(vocab.lookup_value("ran"), Some(3));
    }

    #[test]
    fn test_encode_counts_frequencies() {
        let (_, vocab) = encode_str("go go go stop go");
        let entries: Vec<_> = vocab.entries().collect();
        assert_eq!(entries[0].word, "go");
        assert_eq!(entries[0].frequency, 4);
        assert_eq!(entries[1].word, "stop");
        assert_eq!(entries[1].frequency, 1);
    }

    #[test]
    fn test_encode_final_word_has_no_trailing_separator() {
        let (output, _) = encode_str("cat");
        assert_eq!(output, "1");
    }

    #[test]
    fn test_encode_preserves_separator_runs() {
        let (output, _) = encode_str("  a,\tb  ");
        assert_eq!(output, "  1,\t2  ");
    }

    #[test]
    fn test_encode_empty_input() {
        let (output, vocab) = encode_str("");
        assert_eq!(output, "");
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_encode_values_render_in_base62() {
        // Drive the vocab past value 61 so a two-digit value appears.
        let mut encoder = WordEncoder::new(WordVocab::new());
        for n in 0..62 {
            encoder.encode(format!("w{n}").as_bytes()).unwrap();
        }
        let output = encoder.encode(b"overflow").unwrap();
        assert_eq!(output, b"11");
    }

    #[test]
    fn test_encode_reuses_loaded_values() {
        let mut vocab = WordVocab::new();
        vocab.record_occurrence("cat").unwrap();
        vocab.record_occurrence("sat").unwrap();

        let mut encoder = WordEncoder::new(vocab);
        let output = encoder.encode(b"sat cat new").unwrap();
        assert_eq!(output, b"2 1 3");
    }

    #[test]
    fn test_encode_splits_overlong_word_runs() {
        let input = vec![b'x'; MAX_WORD_BYTES + 1];
        let mut encoder = WordEncoder::new(WordVocab::new());
        let output = encoder.encode(&input).unwrap();
        // A 99-byte word and a 1-byte word, encoded back to back.
        assert_eq!(output, b"12");
        assert_eq!(encoder.vocab().len(), 2);
    }
}
