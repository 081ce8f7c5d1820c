//! Contiguous storage for search keys.
//!
//! All keys of a column live in one `String`; rows are referenced by
//! (offset, length) spans, so adding a row never allocates per key.
//!
//! ```text
//! Buffer: [key0][key1][key2]...[free space]
//!         ^     ^     ^
//! Spans: (0,6) (6,4) (10,9) ...
//! ```

use tablefold_types::RowId;

/// Key reference - 8 bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySpan {
    offset: u32,
    len: u32,
}

impl KeySpan {
    /// Creates a new key span.
    #[inline(always)]
    pub const fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the arena.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Returns `true` for an empty key.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Append-only key storage.
#[derive(Debug, Default)]
pub struct KeyArena {
    buffer: String,
    spans: Vec<KeySpan>,
}

impl KeyArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::with_capacity(16 * 1024, 256)
    }

    /// Creates a new arena with pre-allocated capacity.
    pub fn with_capacity(buffer_cap: usize, key_cap: usize) -> Self {
        Self {
            buffer: String::with_capacity(buffer_cap),
            spans: Vec::with_capacity(key_cap),
        }
    }

    /// Returns the number of keys stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no keys are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total bytes of stored keys.
    #[inline(always)]
    pub fn bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Clears all keys, keeping capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
    }

    /// Appends a key.
    ///
    /// Returns `None` once the buffer or the row count would overflow `u32`.
    #[inline]
    pub fn push(&mut self, key: &str) -> Option<RowId> {
        let row = RowId::try_from(self.spans.len()).ok()?;
        let offset = u32::try_from(self.buffer.len()).ok()?;
        let len = u32::try_from(key.len()).ok()?;
        offset.checked_add(len)?;

        self.buffer.push_str(key);
        self.spans.push(KeySpan::new(offset, len));
        Some(row)
    }

    /// Gets a key by row.
    #[inline(always)]
    pub fn get(&self, row: RowId) -> Option<&str> {
        let span = self.spans.get(row as usize)?;
        self.buffer.get(span.offset()..span.offset() + span.len())
    }

    /// Iterates keys in row order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &str)> + '_ {
        self.spans.iter().enumerate().map(move |(row, span)| {
            (
                row as RowId,
                &self.buffer[span.offset()..span.offset() + span.len()],
            )
        })
    }
}
