//! # Vocabulary Export
//!
//! One-way, human-readable dictionary snapshots. These are produced after
//! a forward-encoding run for inspection; nothing ever reads them back.

mod csv_export;
mod json_export;

#[doc(inline)]
pub use csv_export::*;
#[doc(inline)]
pub use json_export::*;
