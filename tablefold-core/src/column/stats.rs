//! Column statistics.

use tablefold_types::FilterStats;

use crate::column::types::FilterColumn;

impl FilterColumn {
    /// Returns a snapshot of the column's statistics.
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            rows: self.keys.len(),
            key_bytes: self.keys.bytes(),
            rows_added: self.rows_added,
            queries_executed: self.query_count,
        }
    }
}
