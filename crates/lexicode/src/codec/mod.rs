//! # Codec Pipeline
//!
//! Forward and inverse transformation over a [`WordVocab`](crate::vocab::WordVocab):
//!
//! * [`WordEncoder`] replaces each word with the base62 rendering of its
//!   dictionary value, growing the vocab as new words appear.
//! * [`WordDecoder`] resolves base62 tokens back into words, bracketing
//!   any token whose value the vocab does not hold.
//! * [`encode_path`] / [`decode_path`] run the whole file pipeline,
//!   including dictionary load/persist and optional exports.
//!
//! Both directions consume every input byte exactly once, in order, and
//! never reorder words and separators.

mod pipeline;
mod word_decoder;
mod word_encoder;

#[doc(inline)]
pub use pipeline::*;
#[doc(inline)]
pub use word_decoder::*;
#[doc(inline)]
pub use word_encoder::*;
