//! # JSON Snapshot

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::LcResult;
use crate::vocab::WordVocab;

#[derive(Serialize)]
struct ExportMetadata {
    total_words: usize,
    encoding: &'static str,
    case_sensitive: bool,
    punctuation_included: bool,
}

#[derive(Serialize)]
struct ExportEntry<'a> {
    word: &'a str,
    value: u32,
    frequency: u32,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    metadata: ExportMetadata,
    dictionary: Vec<ExportEntry<'a>>,
}

/// Write a JSON snapshot of `vocab` to `path`, entries in vocab order.
pub fn export_vocab_json_path<P: AsRef<Path>>(
    path: P,
    vocab: &WordVocab,
) -> LcResult<()> {
    let document = ExportDocument {
        metadata: ExportMetadata {
            total_words: vocab.len(),
            encoding: "base62",
            case_sensitive: true,
            punctuation_included: true,
        },
        dictionary: vocab
            .entries()
            .map(|entry| ExportEntry {
                word: &entry.word,
                value: entry.value,
                frequency: entry.frequency,
            })
            .collect(),
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &document).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
