//! Adding and retrieving rows.

use core::fmt::Write;

use tablefold_types::{CellValue, RowId};

use crate::column::types::FilterColumn;
use crate::hooks::normalize;

impl FilterColumn {
    /// Adds a cell and returns its row.
    ///
    /// Returns `None` once the column can address no more rows or key bytes.
    pub fn add(&mut self, value: impl Into<CellValue>) -> Option<RowId> {
        let key = normalize(self.kind, value.into());

        self.key_buf.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.key_buf, "{}", key);
        if self.config.case_insensitive {
            self.key_buf = self.key_buf.to_lowercase();
        }

        let row = self.keys.push(&self.key_buf)?;
        self.rows_added += 1;
        Some(row)
    }

    /// Adds multiple cells, returning how many were stored.
    pub fn add_batch(&mut self, values: &[CellValue]) -> usize {
        let mut added = 0;
        for value in values {
            if self.add(value.clone()).is_some() {
                added += 1;
            }
        }
        added
    }

    /// Returns the stored search key of a row.
    #[inline(always)]
    pub fn get(&self, row: RowId) -> Option<&str> {
        self.keys.get(row)
    }
}
