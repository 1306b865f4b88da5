//! # Byte Span Scanning
//!
//! This module factors out input classification for the codec.
//!
//! [`SpanScanner`] walks a byte slice and labels every byte as part of a
//! [`SpanRef::Word`] (a maximal run of ASCII alphanumerics, capped at the
//! scanner's word limit) or a [`SpanRef::Gap`] (a single separator byte).
//!
//! The scan is lossless: concatenating the labeled ranges in order
//! reproduces the input exactly, for arbitrary byte input.

mod span_ref;
mod span_scanner;

#[doc(inline)]
pub use span_ref::*;
#[doc(inline)]
pub use span_scanner::*;
