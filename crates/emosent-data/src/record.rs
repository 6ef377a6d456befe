use std::{ops::Index, slice};

use serde::Serialize;

use crate::schema::TABLE_COLUMNS;

/// One emoji of the working table, with its derived sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmojiRecord {
    /// The emoji glyph.
    pub char: String,
    /// Human-readable Unicode name.
    pub unicode_name: String,
    /// Number of observed uses; finite and non-negative, possibly fractional.
    pub occurrences: f64,
    /// Mean normalized position within text (0 = start, 1 = end).
    pub position: f64,
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    /// `positive - negative`.
    pub sentiment: f64,
    /// `sentiment > 0`.
    #[serde(rename = "positive flag")]
    pub positive_flag: bool,
}

impl EmojiRecord {
    /// Builds a record and computes its derived columns.
    #[must_use]
    pub fn new(
        char: impl Into<String>,
        unicode_name: impl Into<String>,
        occurrences: f64,
        position: f64,
        negative: f64,
        neutral: f64,
        positive: f64,
    ) -> Self {
        let sentiment = positive - negative;
        Self {
            char: char.into(),
            unicode_name: unicode_name.into(),
            occurrences,
            position,
            negative,
            neutral,
            positive,
            sentiment,
            positive_flag: sentiment > 0.0,
        }
    }
}

/// The derived dataset: one [`EmojiRecord`] per source row, in file order.
///
/// The table has no mutating API; share it behind an `Arc` once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmojiTable {
    records: Vec<EmojiRecord>,
}

impl EmojiTable {
    #[must_use]
    pub fn new(records: Vec<EmojiRecord>) -> Self {
        Self { records }
    }

    /// Column names of the table, working columns first, then derived ones.
    #[must_use]
    pub fn columns(&self) -> &'static [&'static str] {
        &TABLE_COLUMNS
    }

    #[must_use]
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, EmojiRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<EmojiRecord> for EmojiTable {
    fn from_iter<T: IntoIterator<Item = EmojiRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EmojiTable {
    type Item = &'a EmojiRecord;
    type IntoIter = slice::Iter<'a, EmojiRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for EmojiTable {
    type Output = EmojiRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
