//! # Span References

use core::ops::Range;

/// Classified byte range produced by a [`SpanScanner`](crate::spanning::SpanScanner).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A maximal run of word bytes, capped at the scanner's word limit.
    Word(Range<usize>),

    /// A single separator byte.
    Gap(Range<usize>),
}

impl SpanRef {
    /// The labeled range, regardless of class.
    pub fn range(&self) -> &Range<usize> {
        match self {
            SpanRef::Word(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}
