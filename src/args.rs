use clv::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Input files for the cards and their transactions
#[derive(Debug)]
pub struct InputPaths {
    pub cards: PathBuf,
    pub transactions: PathBuf,
}

/// Parses the input arguments. Either no arguments, to use the bundled sample cards, or exactly
/// two: the cards file followed by the transactions file.
pub fn parse_input_args() -> Result<Option<InputPaths>> {
    let args: Vec<String> = env::args().skip(1).collect();

    return match args.as_slice() {
        [] => Ok(None),
        [cards, transactions] => Ok(Some(InputPaths {
            cards: canonicalize(cards)?,
            transactions: canonicalize(transactions)?,
        })),
        _ => Err(InputArgsError::Parse(
            "Expected either no arguments, or a cards file followed by a transactions file."
                .to_string(),
        )
        .into()),
    };
}

fn canonicalize(filename: &str) -> Result<PathBuf> {
    let path = fs::canonicalize(filename)
        .with_context(|| InputArgsError::FileNotFound(filename.to_string()))?;

    Ok(path)
}
