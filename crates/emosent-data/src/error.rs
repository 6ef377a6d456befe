use crate::schema::Column;

/// Errors raised while turning the dataset file into an [`EmojiTable`](crate::EmojiTable).
///
/// None of these are retried: the source file is static, so a second attempt
/// would fail the same way.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DataError {
    /// The file is missing, unreadable, or not delimited text with a header row.
    #[display("data unavailable from {origin}: {source}")]
    DataUnavailable {
        /// Path (or reader description) the data was requested from.
        origin: String,
        source: csv::Error,
    },
    /// A source column required by the working projection is absent.
    #[display("schema mismatch: missing column '{}' (for '{column}')", column.source_header())]
    SchemaMismatch {
        column: Column,
    },
    /// A numeric cell could not be parsed.
    #[display("invalid value in data row {row}, column '{column}': {value:?}")]
    InvalidValue {
        /// 1-based data row number (the header row is not counted).
        row: usize,
        column: Column,
        value: String,
    },
}

impl DataError {
    pub(crate) fn unavailable(origin: impl Into<String>, source: impl Into<csv::Error>) -> Self {
        Self::DataUnavailable {
            origin: origin.into(),
            source: source.into(),
        }
    }
}
