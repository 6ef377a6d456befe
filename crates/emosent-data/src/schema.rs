//! Column schema of the emoji sentiment dataset
//!
//! The source file uses descriptive headers such as `Occurrences [5...max]`.
//! Each header maps to a stable semantic [`Column`]; only the seven
//! [`Column::WORKING`] columns survive normalization.

use std::fmt;

use serde::Serialize;

/// A column of the emoji sentiment dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Char,
    Image,
    UnicodeCodepoint,
    Occurrences,
    Position,
    Negative,
    Neutral,
    Positive,
    SentimentBar,
    UnicodeName,
    UnicodeBlock,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.name(), f)
    }
}

impl Column {
    /// All columns, in the order they appear in the source file.
    pub const ALL: [Self; 11] = [
        Self::Char,
        Self::Image,
        Self::UnicodeCodepoint,
        Self::Occurrences,
        Self::Position,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
        Self::SentimentBar,
        Self::UnicodeName,
        Self::UnicodeBlock,
    ];

    /// Columns kept after normalization, in projection order.
    pub const WORKING: [Self; 7] = [
        Self::Char,
        Self::UnicodeName,
        Self::Occurrences,
        Self::Position,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
    ];

    /// Header used for this column in the source CSV file.
    #[must_use]
    pub const fn source_header(self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Image => "Image [twemoji]",
            Self::UnicodeCodepoint => "Unicode codepoint",
            Self::Occurrences => "Occurrences [5...max]",
            Self::Position => "Position [0...1]",
            Self::Negative => "Neg [0...1]",
            Self::Neutral => "Neut [0...1]",
            Self::Positive => "Pos [0...1]",
            Self::SentimentBar => "Sentiment bar (c.i. 95%)",
            Self::UnicodeName => "Unicode name",
            Self::UnicodeBlock => "Unicode block",
        }
    }

    /// Semantic name of this column after renaming.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Image => "image",
            Self::UnicodeCodepoint => "unicode_codepoint",
            Self::Occurrences => "occurrences",
            Self::Position => "position",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::SentimentBar => "sentiment_bar",
            Self::UnicodeName => "unicode_name",
            Self::UnicodeBlock => "unicode_block",
        }
    }

    /// Looks up a column by its exact source header (case- and spelling-sensitive).
    #[must_use]
    pub fn from_source_header(header: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.source_header() == header)
    }

    /// Index of this column in [`Column::WORKING`], if it is a working column.
    #[must_use]
    pub fn working_index(self) -> Option<usize> {
        Self::WORKING.iter().position(|&column| column == self)
    }

    /// Returns the source header line, comma separated.
    #[must_use]
    pub fn source_header_line() -> String {
        Self::ALL.map(Self::source_header).join(",")
    }
}

/// Names of every column of a derived [`EmojiTable`](crate::EmojiTable), in order.
pub const TABLE_COLUMNS: [&str; 9] = [
    "char",
    "unicode_name",
    "occurrences",
    "position",
    "negative",
    "neutral",
    "positive",
    "sentiment",
    "positive flag",
];
