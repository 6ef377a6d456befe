//! Loading and preparation of the emoji sentiment dataset
//!
//! The dataset is a single CSV file (`emoji-sentiment.csv`) with one row per
//! emoji. This crate turns it into an immutable [`EmojiTable`].
//!
//! # Pipeline
//!
//! ```text
//! emoji-sentiment.csv
//!     ↓
//! Loader        (raw::RawTable)               DataUnavailable
//!     ↓
//! Normalizer    (normalize::NormalizedTable)  SchemaMismatch
//!     ↓
//! Derivation    (derive::derive_table)        InvalidValue
//!     ↓
//! EmojiTable
//! ```
//!
//! 1. **Loader** ([`raw::RawTable`]): reads every row with the original
//!    headers, in file order
//! 2. **Normalizer** ([`normalize::NormalizedTable`]): renames headers to
//!    semantic [`Column`]s and projects the seven working columns
//! 3. **Derivation** ([`derive::derive_table`]): parses numbers and adds
//!    `sentiment` and the positive flag
//!
//! [`load`] runs all three steps. [`TableCache`] memoizes them per version of
//! the source file.
//!
//! # Examples
//!
//! ```
//! let csv = "\
//! Char,Unicode name,Occurrences [5...max],Position [0...1],Neg [0...1],Neut [0...1],Pos [0...1]
//! 😀,GRINNING FACE,600,0.7,0.1,0.2,0.7
//! 😡,POUTING FACE,600,0.2,0.8,0.1,0.1
//! ";
//! let table = emosent_data::load_from_reader(csv.as_bytes()).unwrap();
//! assert_eq!(table.len(), 2);
//! assert!(table[0].positive_flag);
//! assert!(!table[1].positive_flag);
//! ```

use std::{io, path::Path};

use tracing::info;

pub use self::{
    cache::TableCache,
    error::DataError,
    normalize::NormalizedTable,
    raw::RawTable,
    record::{EmojiRecord, EmojiTable},
    schema::Column,
};

pub mod cache;
pub mod derive;
mod error;
pub mod normalize;
pub mod raw;
pub mod record;
pub mod schema;
#[cfg(test)]
mod test_util;

/// Default file name of the dataset.
pub const DEFAULT_DATA_FILE: &str = "emoji-sentiment.csv";

/// Loads, normalizes and derives the table stored at `path`.
///
/// There is no partial result: any failure aborts the whole load.
pub fn load<P>(path: P) -> Result<EmojiTable, DataError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let table = prepare(RawTable::from_path(path)?)?;
    info!(path = %path.display(), rows = table.len(), "loaded emoji dataset");
    Ok(table)
}

/// Same as [`load`], reading CSV text from `reader`.
pub fn load_from_reader<R>(reader: R) -> Result<EmojiTable, DataError>
where
    R: io::Read,
{
    prepare(RawTable::from_reader(reader)?)
}

fn prepare(raw: RawTable) -> Result<EmojiTable, DataError> {
    let normalized = NormalizedTable::from_raw(raw)?;
    derive::derive_table(&normalized)
}
