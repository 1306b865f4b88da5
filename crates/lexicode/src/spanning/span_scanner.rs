//! # Span Scanner

use crate::spanning::SpanRef;

/// Default word-length cap, in bytes.
///
/// Word runs longer than this split into consecutive [`SpanRef::Word`]
/// spans rather than erroring.
pub const MAX_WORD_BYTES: usize = 99;

/// Whether a byte belongs to a word.
///
/// Classification is byte-level only: ASCII alphanumerics are word bytes,
/// everything else (punctuation, whitespace, non-ASCII) is a separator.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Lazy scanner over a byte slice, yielding [`SpanRef`] items.
///
/// The scanner is finite and restartable: it borrows the input, and a
/// fresh scanner over the same slice replays the same spans.
#[derive(Clone, Debug)]
pub struct SpanScanner<'a> {
    input: &'a [u8],
    cursor: usize,
    max_word_len: usize,
}

impl<'a> SpanScanner<'a> {
    /// Scan `input` with the default [`MAX_WORD_BYTES`] word cap.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            max_word_len: MAX_WORD_BYTES,
        }
    }

    /// Override the word-length cap.
    ///
    /// ## Arguments
    /// * `max_word_len` - the new cap, in bytes; must be non-zero.
    pub fn with_max_word_len(
        mut self,
        max_word_len: usize,
    ) -> Self {
        assert!(max_word_len > 0, "word cap must be non-zero");
        self.max_word_len = max_word_len;
        self
    }
}

impl Iterator for SpanScanner<'_> {
    type Item = SpanRef;

    fn next(&mut self) -> Option<SpanRef> {
        let start = self.cursor;
        let byte = *self.input.get(start)?;

        if !is_word_byte(byte) {
            self.cursor = start + 1;
            return Some(SpanRef::Gap(start..start + 1));
        }

        let mut end = start + 1;
        while end - start < self.max_word_len
            && self.input.get(end).copied().is_some_and(is_word_byte)
        {
            end += 1;
        }
        self.cursor = end;
        Some(SpanRef::Word(start..end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ops::Range;
    use proptest::prelude::*;

    fn scan(input: &[u8]) -> Vec<SpanRef> {
        SpanScanner::new(input).collect()
    }

    #[test]
    fn test_scan_words_and_gaps() {
        assert_eq!(
            scan(b"cat sat."),
            vec![
                SpanRef::Word(0..3),
                SpanRef::Gap(3..4),
                SpanRef::Word(4..7),
                SpanRef::Gap(7..8),
            ]
        );
    }

    #[test]
    fn test_scan_empty() {
        assert_eq!(scan(b""), vec![]);
    }

    #[test]
    fn test_scan_separator_runs_stay_single_bytes() {
        assert_eq!(
            scan(b"a,, b"),
            vec![
                SpanRef::Word(0..1),
                SpanRef::Gap(1..2),
                SpanRef::Gap(2..3),
                SpanRef::Gap(3..4),
                SpanRef::Word(4..5),
            ]
        );
    }

    #[test]
    fn test_scan_non_ascii_is_separator() {
        // Each byte of a multi-byte encoding is its own gap.
        assert_eq!(
            scan("aé".as_bytes()),
            vec![SpanRef::Word(0..1), SpanRef::Gap(1..2), SpanRef::Gap(2..3)]
        );
    }

    #[test]
    fn test_long_word_runs_split_at_cap() {
        let input = vec![b'x'; 205];
        assert_eq!(
            scan(&input),
            vec![
                SpanRef::Word(0..99),
                SpanRef::Word(99..198),
                SpanRef::Word(198..205),
            ]
        );
    }

    #[test]
    fn test_custom_word_cap() {
        let spans: Vec<SpanRef> = SpanScanner::new(b"abcdefghijkl")
            .with_max_word_len(9)
            .collect();
        assert_eq!(spans, vec![SpanRef::Word(0..9), SpanRef::Word(9..12)]);
    }

    #[test]
    fn test_scanner_restarts_from_fresh_instance() {
        let input = b"one two";
        assert_eq!(scan(input), scan(input));
    }

    proptest! {
        #[test]
        fn prop_lossless(input in proptest::collection::vec(any::<u8>(), 0..512)) {
            let mut rebuilt = Vec::with_capacity(input.len());
            for span in SpanScanner::new(&input) {
                rebuilt.extend_from_slice(&input[Range::from(span)]);
            }
            prop_assert_eq!(rebuilt, input);
        }

        #[test]
        fn prop_word_spans_respect_cap(
            input in proptest::collection::vec(any::<u8>(), 0..512),
            cap in 1usize..16,
        ) {
            for span in SpanScanner::new(&input).with_max_word_len(cap) {
                if let SpanRef::Word(range) = span {
                    prop_assert!(range.len() <= cap);
                    prop_assert!(input[range].iter().copied().all(is_word_byte));
                }
            }
        }
    }
}
