//! Numeric parsing and derived columns
//!
//! Turns a [`NormalizedTable`] into an [`EmojiTable`]. Each row is handled
//! independently: `sentiment = positive - negative`, and the positive flag
//! is `sentiment > 0`. A zero-sentiment row is not positive.

use crate::{
    DataError,
    normalize::{NormalizedRow, NormalizedTable},
    record::{EmojiRecord, EmojiTable},
    schema::Column,
};

/// Parses every row and adds the derived columns.
///
/// # Errors
///
/// [`DataError::InvalidValue`] for the first numeric cell that is empty,
/// non-numeric or non-finite, or for a negative `occurrences` value.
pub fn derive_table(normalized: &NormalizedTable) -> Result<EmojiTable, DataError> {
    normalized
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| derive_record(i + 1, row))
        .collect()
}

fn derive_record(row_number: usize, row: &NormalizedRow) -> Result<EmojiRecord, DataError> {
    let cell = |column: Column| RowCell {
        row: row_number,
        column,
        text: row.get(column).unwrap_or_default(),
    };

    Ok(EmojiRecord::new(
        cell(Column::Char).text,
        cell(Column::UnicodeName).text,
        cell(Column::Occurrences).parse_count()?,
        cell(Column::Position).parse_f64()?,
        cell(Column::Negative).parse_f64()?,
        cell(Column::Neutral).parse_f64()?,
        cell(Column::Positive).parse_f64()?,
    ))
}

struct RowCell<'a> {
    row: usize,
    column: Column,
    text: &'a str,
}

impl RowCell<'_> {
    fn invalid(&self) -> DataError {
        DataError::InvalidValue {
            row: self.row,
            column: self.column,
            value: self.text.to_owned(),
        }
    }

    fn parse_f64(&self) -> Result<f64, DataError> {
        self.text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid())
    }

    /// Counts may be fractional (`600.5`) but never negative.
    fn parse_count(&self) -> Result<f64, DataError> {
        let count = self.parse_f64()?;
        if count < 0.0 {
            return Err(self.invalid());
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{raw::RawTable, test_util};

    fn normalized(text: &str) -> NormalizedTable {
        NormalizedTable::from_raw(RawTable::from_reader(text.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_sample_sentiments() {
        let table = derive_table(&normalized(test_util::SAMPLE_CSV)).unwrap();
        let expected = [0.221, 0.746, -0.092, -0.7, 0.0];
        assert_eq!(table.len(), expected.len());
        for (record, expected) in table.iter().zip(expected) {
            assert!(
                (record.sentiment - expected).abs() < 1e-9,
                "{}: {} != {expected}",
                record.char,
                record.sentiment
            );
            assert_eq!(record.positive_flag, record.sentiment > 0.0);
        }
        assert!(!table[4].positive_flag);
    }

    #[test]
    fn test_parsed_fields() {
        let table = derive_table(&normalized(test_util::SAMPLE_CSV)).unwrap();
        let heart = &table[1];
        assert_eq!(heart.char, "❤");
        assert_eq!(heart.unicode_name, "HEAVY BLACK HEART");
        assert!((heart.occurrences - 8050.0).abs() < 1e-12);
        assert!((heart.position - 0.747).abs() < 1e-12);
        assert!((heart.neutral - 0.166).abs() < 1e-12);
    }

    #[test]
    fn test_non_numeric_positive() {
        let text = test_util::SAMPLE_CSV.replacen("0.790", "high", 1);
        let err = derive_table(&normalized(&text)).unwrap_err();
        match err {
            DataError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, Column::Positive);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_negative() {
        let text = test_util::SAMPLE_CSV.replacen(",0.8,", ",,", 1);
        let err = derive_table(&normalized(&text)).unwrap_err();
        assert!(
            matches!(
                err,
                DataError::InvalidValue {
                    row: 4,
                    column: Column::Negative,
                    ..
                }
            ),
            "{err}"
        );
    }

    #[test]
    fn test_nan_is_invalid() {
        let text = test_util::SAMPLE_CSV.replacen("0.805", "NaN", 1);
        assert!(matches!(
            derive_table(&normalized(&text)),
            Err(DataError::InvalidValue {
                column: Column::Position,
                ..
            })
        ));
    }

    #[test]
    fn test_occurrences_formats() {
        for (text, expected) in [("14622.0", 14622.0), ("600.5", 600.5), ("0", 0.0)] {
            let csv = test_util::SAMPLE_CSV.replacen("14622", text, 1);
            let table = derive_table(&normalized(&csv)).unwrap();
            assert!(
                (table[0].occurrences - expected).abs() < 1e-12,
                "{text} parsed as {}",
                table[0].occurrences
            );
        }

        for bad in ["-3", "-0.5", "inf", "many"] {
            let text = test_util::SAMPLE_CSV.replacen("14622", bad, 1);
            assert!(
                matches!(
                    derive_table(&normalized(&text)),
                    Err(DataError::InvalidValue {
                        row: 1,
                        column: Column::Occurrences,
                        ..
                    })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_huge_count_keeps_its_value() {
        let text = test_util::SAMPLE_CSV.replacen("14622", "18446744073709551616", 1);
        let table = derive_table(&normalized(&text)).unwrap();
        assert!((table[0].occurrences - 2_f64.powi(64)).abs() < 1.0);
    }

    #[test]
    fn test_whitespace_around_numbers() {
        let text = test_util::SAMPLE_CSV.replacen(",600,", ", 600 ,", 1);
        let table = derive_table(&normalized(&text)).unwrap();
        assert!((table[3].occurrences - 600.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_table() {
        let header_only = test_util::SAMPLE_CSV.lines().next().unwrap();
        let table = derive_table(&normalized(header_only)).unwrap();
        assert!(table.is_empty());
    }
}
