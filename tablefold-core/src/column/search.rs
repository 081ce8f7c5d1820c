//! Row filtering.

use memchr::memmem::Finder;
use tablefold_types::RowId;
use tracing::trace;

use crate::column::types::FilterColumn;
use crate::hooks::normalize_query;

impl FilterColumn {
    /// Returns the rows matching `query`, in row order.
    ///
    /// The query is folded and lower-cased according to the column's
    /// configuration, then split on whitespace. A row matches when its key
    /// contains every term. A blank query matches every row.
    pub fn search(&mut self, query: &str) -> Vec<RowId> {
        self.query_count += 1;

        let mut prepared = if self.config.fold_query {
            normalize_query(query)
        } else {
            query.to_owned()
        };
        if self.config.case_insensitive {
            prepared = prepared.to_lowercase();
        }

        let finders: Vec<Finder<'_>> = prepared.split_whitespace().map(Finder::new).collect();

        let rows: Vec<RowId> = self
            .keys
            .iter()
            .filter(|(_, key)| {
                finders
                    .iter()
                    .all(|finder| finder.find(key.as_bytes()).is_some())
            })
            .map(|(row, _)| row)
            .collect();

        trace!(
            terms = finders.len(),
            matched = rows.len(),
            rows = self.keys.len(),
            "filtered column"
        );
        rows
    }
}
