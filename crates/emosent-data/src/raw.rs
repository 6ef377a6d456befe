use std::{io, path::Path};

use crate::DataError;

/// A CSV file as read from disk: verbatim headers and string cells, in file order.
///
/// No column is interpreted at this stage; see
/// [`NormalizedTable`](crate::normalize::NormalizedTable) for renaming and projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the header row, exactly as written in the file.
    pub headers: Vec<String>,
    /// Each data row, one string per field.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Reads a whole CSV file.
    ///
    /// Either every row is read or the call fails with
    /// [`DataError::DataUnavailable`]; ragged rows count as a parse failure.
    pub fn from_path<P>(path: P) -> Result<Self, DataError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let reader = csv::Reader::from_path(path).map_err(|e| DataError::unavailable(&origin, e))?;
        Self::from_csv(reader).map_err(|e| DataError::unavailable(origin, e))
    }

    /// Reads CSV text from any reader.
    pub fn from_reader<R>(reader: R) -> Result<Self, DataError>
    where
        R: io::Read,
    {
        Self::from_csv(csv::Reader::from_reader(reader))
            .map_err(|e| DataError::unavailable("<reader>", e))
    }

    fn from_csv<R>(mut reader: csv::Reader<R>) -> Result<Self, csv::Error>
    where
        R: io::Read,
    {
        let headers = reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_owned).collect::<Vec<_>>()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
