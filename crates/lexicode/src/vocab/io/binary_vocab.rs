//! # Binary Vocab Records
//!
//! The on-disk dictionary is a bare record stream, one record per entry
//! in vocab order:
//!
//! ```text
//! u32 word_len (little-endian)
//! [u8; word_len] word bytes (no terminator)
//! u32 value (little-endian)
//! u32 frequency (little-endian)
//! ```
//!
//! No header, no count, no checksum; end of file ends the dictionary.
//! A record that ends mid-read fails with
//! [`LexicodeError::CorruptDictionary`] rather than yielding a partially
//! populated vocab.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{LcResult, LexicodeError};
use crate::spanning::MAX_WORD_BYTES;
use crate::vocab::{WordEntry, WordVocab};

/// Load a vocab from a binary dictionary file.
///
/// ## Arguments
/// * `path` - the dictionary file path.
///
/// ## Returns
/// The loaded vocab; an empty vocab if the file does not exist.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> LcResult<WordVocab> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no dictionary at {}, starting empty", path.display());
            return Ok(WordVocab::new());
        }
        Err(err) => return Err(err.into()),
    };

    let vocab = read_vocab(BufReader::new(file))?;
    log::debug!(
        "loaded {} entries from {}",
        vocab.len(),
        path.display()
    );
    Ok(vocab)
}

/// Read a vocab from a binary record stream.
pub fn read_vocab<R: Read>(mut reader: R) -> LcResult<WordVocab> {
    let mut vocab = WordVocab::new();
    while let Some(word_len) = read_record_len(&mut reader)? {
        vocab.push_entry(read_record_body(&mut reader, word_len)?)?;
    }
    Ok(vocab)
}

/// Save a vocab to a binary dictionary file.
///
/// The whole file is rewritten from the in-memory vocab. The write goes to
/// a temporary sibling first and is renamed into place, so a crash
/// mid-write leaves the previous dictionary intact.
pub fn save_vocab_path<P: AsRef<Path>>(
    path: P,
    vocab: &WordVocab,
) -> LcResult<()> {
    let path = path.as_ref();
    let staging = staging_path(path);

    let mut writer = BufWriter::new(File::create(&staging)?);
    write_vocab(&mut writer, vocab)?;
    let file = writer.into_inner().map_err(io::Error::from)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&staging, path)?;
    log::debug!("saved {} entries to {}", vocab.len(), path.display());
    Ok(())
}

/// Write a vocab as a binary record stream.
pub fn write_vocab<W: Write>(
    mut writer: W,
    vocab: &WordVocab,
) -> LcResult<()> {
    for entry in vocab.entries() {
        // Word lengths are capped far below u32::MAX.
        let word_len = entry.word.len() as u32;
        writer.write_all(&word_len.to_le_bytes())?;
        writer.write_all(entry.word.as_bytes())?;
        writer.write_all(&entry.value.to_le_bytes())?;
        writer.write_all(&entry.frequency.to_le_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read the leading length field of the next record.
///
/// Clean end-of-stream at a record boundary yields `None`; a partial
/// length field is a truncated record.
fn read_record_len<R: Read>(reader: &mut R) -> LcResult<Option<u32>> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        let count = reader.read(&mut buf[filled..])?;
        if count == 0 {
            break;
        }
        filled += count;
    }
    match filled {
        0 => Ok(None),
        4 => Ok(Some(u32::from_le_bytes(buf))),
        _ => Err(LexicodeError::corrupt("record length field truncated")),
    }
}

fn read_record_body<R: Read>(
    reader: &mut R,
    word_len: u32,
) -> LcResult<WordEntry> {
    if word_len == 0 || word_len as usize > MAX_WORD_BYTES {
        return Err(LexicodeError::corrupt(format!(
            "implausible word length {word_len}"
        )));
    }

    let mut word_bytes = vec![0u8; word_len as usize];
    reader
        .read_exact(&mut word_bytes)
        .map_err(|_| LexicodeError::corrupt("word bytes truncated"))?;
    let word = String::from_utf8(word_bytes)
        .map_err(|err| LexicodeError::corrupt(format!("word is not UTF-8: {err}")))?;

    let value = read_field(reader, &word, "value")?;
    let frequency = read_field(reader, &word, "frequency")?;

    Ok(WordEntry {
        word,
        value,
        frequency,
    })
}

fn read_field<R: Read>(
    reader: &mut R,
    word: &str,
    field: &str,
) -> LcResult<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf).map_err(|_| {
        LexicodeError::corrupt(format!("{field} field missing for word {word:?}"))
    })?;
    Ok(u32::from_le_bytes(buf))
}
