//! # Lexicode
//!
//! A reversible, dictionary-backed word-substitution codec.
//!
//! Text is scanned into words (ASCII alphanumeric runs) and single-byte
//! separators. Each distinct word gets a stable numeric value, rendered in
//! base62; the word ↔ value dictionary persists to a binary file so the
//! substitution stays reversible across runs.
//!
//! ```rust
//! use lexicode::{WordDecoder, WordEncoder, vocab::WordVocab};
//!
//! fn example() -> lexicode::LcResult<()> {
//!     let mut encoder = WordEncoder::new(WordVocab::new());
//!     let encoded = encoder.encode(b"cat sat. cat ran.")?;
//!     assert_eq!(encoded, b"1 2. 1 3.");
//!
//!     let vocab = encoder.into_vocab();
//!     let decoded = WordDecoder::new(&vocab).decode(&encoded);
//!     assert_eq!(decoded, b"cat sat. cat ran.");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! File-level runs (dictionary load → transform → dictionary persist) live
//! in [`codec::encode_path`] and [`codec::decode_path`].

pub mod base62;
pub mod codec;
pub mod error;
pub mod spanning;
pub mod vocab;

pub use codec::{WordDecoder, WordEncoder};
pub use error::{LcResult, LexicodeError};
pub use vocab::{WordEntry, WordVocab};
