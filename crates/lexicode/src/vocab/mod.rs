//! # Word Vocabulary
//!
//! [`WordVocab`] is the in-memory dictionary behind the codec: an ordered
//! collection of [`WordEntry`] items, indexed both by word and by value.
//!
//! Entries keep their first-seen order; that order is the on-disk record
//! order (see [`io`]) and the export order (see [`export`]).

mod word_vocab;

pub mod export;
pub mod io;

#[doc(inline)]
pub use word_vocab::*;
