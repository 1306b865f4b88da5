//! # Vocabulary IO
//!
//! Binary persistence for [`WordVocab`](crate::vocab::WordVocab).
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use lexicode::vocab::{WordVocab, io::load_vocab_path};
//!
//! fn example() -> lexicode::LcResult<WordVocab> {
//!     // A missing file yields an empty vocab.
//!     load_vocab_path("dictionary.bin")
//! }
//! ```

mod binary_vocab;

#[doc(inline)]
pub use binary_vocab::*;
