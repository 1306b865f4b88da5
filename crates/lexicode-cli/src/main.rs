//! Command-line front end for the lexicode codec.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use lexicode::codec::{DecodeOptions, EncodeOptions, decode_path, encode_path};

/// Reversible dictionary-backed word-substitution codec.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Replace words with base62 dictionary values.
    Encode {
        /// Source text file.
        input: PathBuf,

        /// Encoded output file.
        output: PathBuf,

        /// Binary dictionary file, loaded at start and persisted at end.
        #[arg(long, default_value = "dictionary.bin")]
        dictionary: PathBuf,

        /// Also write a JSON snapshot of the dictionary.
        #[arg(long)]
        export_json: Option<PathBuf>,

        /// Also write a CSV snapshot of the dictionary.
        #[arg(long)]
        export_csv: Option<PathBuf>,
    },

    /// Resolve base62 values back into words.
    Decode {
        /// Encoded input file.
        input: PathBuf,

        /// Reconstructed output file.
        output: PathBuf,

        /// Binary dictionary file, read-only.
        #[arg(long, default_value = "dictionary.bin")]
        dictionary: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(args.verbose as usize + 1)
        .init()?;

    match args.command {
        Command::Encode {
            input,
            output,
            dictionary,
            export_json,
            export_csv,
        } => {
            let report = encode_path(&EncodeOptions {
                input,
                output,
                dictionary,
                export_json,
                export_csv,
            })
            .context("encoding failed")?;

            println!(
                "Encoded {} bytes into {} bytes; dictionary holds {} words.",
                report.input_bytes, report.output_bytes, report.distinct_words,
            );
        }
        Command::Decode {
            input,
            output,
            dictionary,
        } => {
            let report = decode_path(&DecodeOptions {
                input,
                output,
                dictionary,
            })
            .context("decoding failed")?;

            println!(
                "Decoded {} bytes into {} bytes.",
                report.input_bytes, report.output_bytes,
            );
            if report.unresolved_tokens > 0 {
                println!(
                    "{} tokens had no dictionary entry and were bracketed.",
                    report.unresolved_tokens,
                );
            }
        }
    }

    Ok(())
}
