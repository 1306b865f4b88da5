//! # Inverse Decoder

use core::str;

use crate::base62::{MAX_BASE62_DIGITS, decode_base62};
use crate::spanning::{SpanRef, SpanScanner};
use crate::vocab::WordVocab;

/// Inverse (encoded → text) transformer.
///
/// Borrows the vocab read-only: decoding never alters frequencies, never
/// assigns values, and never persists anything.
///
/// A token whose decoded value has no entry degrades to the literal token
/// wrapped in square brackets; decoding continues past it.
#[derive(Clone, Debug)]
pub struct WordDecoder<'a> {
    vocab: &'a WordVocab,
}

impl<'a> WordDecoder<'a> {
    /// Build a decoder over `vocab`.
    pub fn new(vocab: &'a WordVocab) -> Self {
        Self { vocab }
    }

    /// Decode `input`, appending to `output`.
    ///
    /// Alphanumeric runs are read as base62 tokens of at most
    /// [`MAX_BASE62_DIGITS`] bytes (longer runs split); separator bytes
    /// copy through unchanged.
    ///
    /// ## Returns
    /// The number of unresolved tokens emitted in bracketed form.
    pub fn decode_append(
        &self,
        input: &[u8],
        output: &mut Vec<u8>,
    ) -> usize {
        let mut unresolved = 0;
        for span in SpanScanner::new(input).with_max_word_len(MAX_BASE62_DIGITS) {
            match span {
                SpanRef::Gap(range) => {
                    output.extend_from_slice(&input[range]);
                }
                SpanRef::Word(range) => {
                    let token = &input[range];
                    // Word spans are ASCII alphanumeric, always valid UTF-8.
                    let text = str::from_utf8(token).unwrap();
                    let value = decode_base62(text);
                    match self.vocab.lookup_word(value) {
                        Some(word) => output.extend_from_slice(word.as_bytes()),
                        None => {
                            log::debug!("no entry for value {value} (token {text:?})");
                            output.push(b'[');
                            output.extend_from_slice(token);
                            output.push(b']');
                            unresolved += 1;
                        }
                    }
                }
            }
        }
        unresolved
    }

    /// Decode `input` into a fresh buffer.
    pub fn decode(
        &self,
        input: &[u8],
    ) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len());
        self.decode_append(input, &mut output);
        output
    }
}
