//! # CSV Snapshot

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::LcResult;
use crate::vocab::WordVocab;

/// Write a CSV snapshot of `vocab` to `path`, entries in vocab order.
///
/// Header `word,value,frequency`, one row per entry. Words are quoted;
/// since words are alphanumeric, no escaping ever arises.
pub fn export_vocab_csv_path<P: AsRef<Path>>(
    path: P,
    vocab: &WordVocab,
) -> LcResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "word,value,frequency")?;
    for entry in vocab.entries() {
        writeln!(
            writer,
            "\"{}\",{},{}",
            entry.word, entry.value, entry.frequency
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_csv_snapshot_shape() {
        let mut vocab = WordVocab::new();
        vocab.record_occurrence("cat").unwrap();
        vocab.record_occurrence("sat").unwrap();
        vocab.record_occurrence("cat").unwrap();

        let dir = TempDir::new("lexicode-export").unwrap();
        let path = dir.path().join("dictionary.csv");
        export_vocab_csv_path(&path, &vocab).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "word,value,frequency\n\"cat\",1,2\n\"sat\",2,1\n"
        );
    }
}
