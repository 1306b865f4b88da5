//! # File Pipeline
//!
//! Whole-file orchestration of the codec: dictionary load, transform,
//! dictionary persist, optional exports. Inputs are buffered in memory;
//! the codec makes no bounded-memory promise.

use std::fs;
use std::path::PathBuf;

use crate::codec::{WordDecoder, WordEncoder};
use crate::error::LcResult;
use crate::vocab::export::{export_vocab_csv_path, export_vocab_json_path};
use crate::vocab::io::{load_vocab_path, save_vocab_path};

/// Options for [`encode_path`].
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Source text path.
    pub input: PathBuf,

    /// Encoded output path.
    pub output: PathBuf,

    /// Binary dictionary path; loaded at start (empty if absent) and
    /// persisted at the end of the run.
    pub dictionary: PathBuf,

    /// Optional JSON snapshot path.
    pub export_json: Option<PathBuf>,

    /// Optional CSV snapshot path.
    pub export_csv: Option<PathBuf>,
}

/// Options for [`decode_path`].
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Encoded input path.
    pub input: PathBuf,

    /// Reconstructed output path.
    pub output: PathBuf,

    /// Binary dictionary path; read-only during decoding.
    pub dictionary: PathBuf,
}

/// Summary of an [`encode_path`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeReport {
    /// Bytes read from the input.
    pub input_bytes: usize,

    /// Bytes written to the output.
    pub output_bytes: usize,

    /// Distinct words in the dictionary after the run.
    pub distinct_words: usize,
}

/// Summary of a [`decode_path`] run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeReport {
    /// Bytes read from the input.
    pub input_bytes: usize,

    /// Bytes written to the output.
    pub output_bytes: usize,

    /// Tokens emitted in bracketed form for lack of a dictionary entry.
    pub unresolved_tokens: usize,
}

/// Forward-encode a file.
///
/// Loads the dictionary, encodes input to output, persists the updated
/// dictionary, and writes any requested snapshots.
pub fn encode_path(options: &EncodeOptions) -> LcResult<EncodeReport> {
    let vocab = load_vocab_path(&options.dictionary)?;
    let input = fs::read(&options.input)?;

    let mut encoder = WordEncoder::new(vocab);
    let mut output = Vec::with_capacity(input.len());
    encoder.encode_append(&input, &mut output)?;
    fs::write(&options.output, &output)?;

    let vocab = encoder.into_vocab();
    save_vocab_path(&options.dictionary, &vocab)?;

    if let Some(path) = &options.export_json {
        export_vocab_json_path(path, &vocab)?;
    }
    if let Some(path) = &options.export_csv {
        export_vocab_csv_path(path, &vocab)?;
    }

    let report = EncodeReport {
        input_bytes: input.len(),
        output_bytes: output.len(),
        distinct_words: vocab.len(),
    };
    log::info!(
        "encoded {} -> {} ({} bytes -> {} bytes, {} distinct words)",
        options.input.display(),
        options.output.display(),
        report.input_bytes,
        report.output_bytes,
        report.distinct_words,
    );
    Ok(report)
}

/// Inverse-decode a file.
///
/// Loads the dictionary read-only; the dictionary file is never written.
pub fn decode_path(options: &DecodeOptions) -> LcResult<DecodeReport> {
    let vocab = load_vocab_path(&options.dictionary)?;
    let input = fs::read(&options.input)?;

    let decoder = WordDecoder::new(&vocab);
    let mut output = Vec::with_capacity(input.len());
    let unresolved_tokens = decoder.decode_append(&input, &mut output);
    fs::write(&options.output, &output)?;

    if unresolved_tokens > 0 {
        log::warn!("{unresolved_tokens} tokens had no dictionary entry");
    }
    let report = DecodeReport {
        input_bytes: input.len(),
        output_bytes: output.len(),
        unresolved_tokens,
    };
    log::info!(
        "decoded {} -> {} ({} bytes -> {} bytes)",
        options.input.display(),
        options.output.display(),
        report.input_bytes,
        report.output_bytes,
    );
    Ok(report)
}
