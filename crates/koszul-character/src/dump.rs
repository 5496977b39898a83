//! Append-only persistence of computed character tables.
//!
//! Each record is one character table, bincode-framed and appended to a
//! dump file. Values travel as exact `a/b` strings so the on-disk format
//! stays independent of the bignum representation.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use koszul_linalg::SolveError;
use koszul_rings::Q;

use crate::character::character;

/// One persisted character table: the values of the quotient character
/// of Λ^power(V_n), one per cycle type in lexicographic partition order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// The symmetric group degree.
    pub n: u32,
    /// The exterior power.
    pub power: u32,
    /// Exact rational values, rendered as `a` or `a/b`.
    pub values: Vec<String>,
}

impl CharacterRecord {
    /// Parses the stored values back into rationals.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::Parse`] if a stored value is not a valid
    /// rational.
    pub fn rationals(&self) -> Result<Vec<Q>, DumpError> {
        self.values
            .iter()
            .map(|s| {
                s.parse::<Q>().map_err(|_| DumpError::Parse {
                    value: s.clone(),
                })
            })
            .collect()
    }
}

/// Errors from writing or reading a character dump.
#[derive(Debug, Error)]
pub enum DumpError {
    /// File I/O failed.
    #[error("dump i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The character computation itself failed.
    #[error("character computation failed: {0}")]
    Solve(#[from] SolveError),
    /// A record could not be serialized.
    #[error("record encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    /// A record could not be deserialized.
    #[error("record decoding failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    /// A stored value is not a valid rational.
    #[error("invalid rational in record: {value:?}")]
    Parse {
        /// The offending stored string.
        value: String,
    },
}

/// Computes the characters of Λⁱ(V_n)/I_{n,i} for every n in `m..=n`
/// and appends one record per degree to the dump file.
///
/// The file is opened in append mode and flushed after every record, so
/// a run killed midway leaves all completed degrees on disk and a rerun
/// with a higher range extends the same file.
///
/// # Errors
///
/// Returns a [`DumpError`] if a character computation or any file
/// operation fails.
pub fn character_dump(m: u32, n: u32, i: u32, path: &Path) -> Result<(), DumpError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    for degree in m..=n {
        let values = character(degree, i as usize)?;
        let record = CharacterRecord {
            n: degree,
            power: i,
            values: values.iter().map(ToString::to_string).collect(),
        };
        bincode::serde::encode_into_std_write(&record, &mut writer, bincode::config::standard())?;
        writer.flush()?;
        info!(degree, i, classes = record.values.len(), "character table dumped");
    }

    Ok(())
}

/// Reads every record of a dump file, in the order they were appended.
///
/// # Errors
///
/// Returns a [`DumpError`] on I/O failure or if the file contains a
/// truncated or corrupt record.
pub fn read_character_dump(path: &Path) -> Result<Vec<CharacterRecord>, DumpError> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    loop {
        if reader.fill_buf()?.is_empty() {
            break;
        }
        let record: CharacterRecord =
            bincode::serde::decode_from_std_read(&mut reader, bincode::config::standard())?;
        records.push(record);
    }

    Ok(records)
}
