//! Filter column state.

use tablefold_types::{FilterConfig, SearchType};
use tracing::debug;

use crate::arena::KeyArena;

/// A single table column of search keys.
///
/// Each added cell is run through the folding hook for the column's
/// [`SearchType`] and stored as text. Searches fold the query the same way
/// and return the rows whose key contains every query term.
#[derive(Debug)]
pub struct FilterColumn {
    pub(crate) kind: SearchType,
    pub(crate) config: FilterConfig,
    pub(crate) keys: KeyArena,
    /// Reusable buffer for rendering a cell's key
    pub(crate) key_buf: String,
    /// Total number of rows added
    pub(crate) rows_added: u64,
    /// Total number of searches executed
    pub(crate) query_count: u64,
}

impl FilterColumn {
    /// Creates an empty column with the default configuration.
    pub fn new(kind: SearchType) -> Self {
        Self::with_config(kind, FilterConfig::default())
    }

    /// Creates an empty column with a custom configuration.
    pub fn with_config(kind: SearchType, config: FilterConfig) -> Self {
        Self {
            kind,
            config,
            keys: KeyArena::new(),
            key_buf: String::with_capacity(256),
            rows_added: 0,
            query_count: 0,
        }
    }

    /// The hook slot cells are normalized through.
    #[inline(always)]
    #[must_use]
    pub fn kind(&self) -> SearchType {
        self.kind
    }

    /// The column's configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> FilterConfig {
        self.config
    }

    /// Returns the number of rows.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the column has no rows.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes all rows. Counters keep running.
    pub fn clear(&mut self) {
        debug!(kind = %self.kind, rows = self.keys.len(), "clearing filter column");
        self.keys.clear();
    }
}
