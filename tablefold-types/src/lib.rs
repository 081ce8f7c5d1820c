//! Core types for accent-folded table search.
//!
//! This crate holds the values that cross the boundary between a host table
//! and the folding hooks in `tablefold-core`:
//!
//! - **CellValue**: the raw, loosely-typed content of a table cell
//! - **SearchType**: the named hook slot a value is normalized through
//! - **FilterConfig**: how a filter column treats its search input

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// Row identifier inside a filter column.
pub type RowId = u32;

/// Raw cell content as handed over by the host table.
///
/// Cells are loosely typed: a column may mix text with numbers, booleans
/// or missing values. Only [`CellValue::Text`] is ever folded.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value was supplied for the cell.
    #[default]
    Undefined,
    /// The cell explicitly holds no value.
    Null,
    /// Boolean cell.
    Bool(bool),
    /// Numeric cell.
    Number(f64),
    /// Text cell, possibly containing markup.
    Text(String),
}

impl CellValue {
    /// Creates an empty text value.
    #[inline]
    pub const fn empty() -> Self {
        CellValue::Text(String::new())
    }

    /// Returns `true` for values the host treats as false in a boolean context.
    ///
    /// Falsy values are `Undefined`, `Null`, `false`, `0`, `-0`, `NaN` and the
    /// empty string. Everything else, including `" "` and `"0"`, is truthy.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Undefined | CellValue::Null => true,
            CellValue::Bool(b) => !b,
            CellValue::Number(n) => *n == 0.0 || n.is_nan(),
            CellValue::Text(s) => s.is_empty(),
        }
    }

    /// Returns the text if this is a text cell.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Undefined => f.write_str("undefined"),
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => fmt_number(*n, f),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 renders as "0"
        f.write_str("0")
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        write!(f, "{:.0}", n)
    } else {
        write!(f, "{}", n)
    }
}

impl From<&str> for CellValue {
    #[inline]
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    #[inline]
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    #[inline]
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    #[inline]
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    #[inline]
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// Named slot a search hook is registered under.
///
/// `#[repr(u8)]` keeps the slot tag one byte wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SearchType {
    /// Plain text cells.
    String = 0,
    /// Cells whose rendered content may contain markup.
    Html = 1,
}

impl SearchType {
    /// All slots, in registration order.
    pub const ALL: [SearchType; 2] = [SearchType::String, SearchType::Html];

    /// Slot name used by the host registry.
    #[must_use]
    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            SearchType::String => "string",
            SearchType::Html => "html",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown slot name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search type: {name:?} (expected \"string\" or \"html\")")]
pub struct ParseSearchTypeError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for SearchType {
    type Err = ParseSearchTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SearchType::String),
            "html" => Ok(SearchType::Html),
            other => Err(ParseSearchTypeError {
                name: other.to_owned(),
            }),
        }
    }
}

/// Filter column configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Fold accents out of the search input before matching, so a query
    /// typed with diacritics still matches folded cell keys.
    pub fold_query: bool,
    /// Compare keys and query in lowercase.
    pub case_insensitive: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            fold_query: true,
            case_insensitive: true,
        }
    }
}

impl FilterConfig {
    /// Matches the search input verbatim against the stored keys.
    pub const fn exact() -> Self {
        Self {
            fold_query: false,
            case_insensitive: false,
        }
    }
}

/// A snapshot of filter column statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    /// Rows currently stored.
    pub rows: usize,
    /// Total bytes of stored search keys.
    pub key_bytes: usize,
    /// Rows added since creation, including cleared ones.
    pub rows_added: u64,
    /// Searches executed since creation.
    pub queries_executed: u64,
}
