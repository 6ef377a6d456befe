//! Column renaming and projection
//!
//! Maps the verbatim source headers of a [`RawTable`] to semantic [`Column`]s
//! and keeps only the [`Column::WORKING`] set, in projection order. Cells stay
//! as text; numeric parsing happens in [`derive`](crate::derive).

use tracing::debug;

use crate::{DataError, raw::RawTable, schema::Column};

const WORKING_LEN: usize = Column::WORKING.len();

/// One projected row: the working columns' text, in [`Column::WORKING`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    cells: [String; WORKING_LEN],
}

impl NormalizedRow {
    /// Returns the cell of a working column, or `None` for a dropped column.
    #[must_use]
    pub fn get(&self, column: Column) -> Option<&str> {
        column.working_index().map(|i| self.cells[i].as_str())
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// The dataset after renaming and projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    rows: Vec<NormalizedRow>,
}

impl NormalizedTable {
    /// Renames and projects a raw table.
    ///
    /// Source headers outside the known mapping are dropped along with the
    /// transient columns. Only the seven working source columns are required.
    ///
    /// # Errors
    ///
    /// [`DataError::SchemaMismatch`] naming the first working column whose
    /// source header is absent.
    pub fn from_raw(raw: RawTable) -> Result<Self, DataError> {
        let renamed = raw
            .headers
            .iter()
            .map(|header| Column::from_source_header(header))
            .collect::<Vec<_>>();

        let mut indices = [0; WORKING_LEN];
        for (slot, column) in indices.iter_mut().zip(Column::WORKING) {
            *slot = renamed
                .iter()
                .position(|&c| c == Some(column))
                .ok_or(DataError::SchemaMismatch { column })?;
        }

        let rows = raw
            .rows
            .into_iter()
            .map(|mut fields| NormalizedRow {
                cells: indices.map(|i| fields.get_mut(i).map(std::mem::take).unwrap_or_default()),
            })
            .collect::<Vec<_>>();

        debug!(
            rows = rows.len(),
            dropped_columns = raw.headers.len().saturating_sub(WORKING_LEN),
            "normalized dataset columns"
        );
        Ok(Self { rows })
    }

    /// Column order of every row.
    #[must_use]
    pub fn columns(&self) -> &'static [Column] {
        &Column::WORKING
    }

    #[must_use]
    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
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
