//! Search hooks.
//!
//! These are the entry points a host table calls with a raw cell value to get
//! the representation it filters on. Only text is folded: falsy values become
//! the empty string and every other value is returned as-is.

use tablefold_types::{CellValue, SearchType};

use crate::analyzer::fold::fold_accents;
use crate::analyzer::markup::strip_tags;

/// Signature of a hook stored in a [`SearchTypeRegistry`](crate::registry::SearchTypeRegistry).
pub type SearchHook = fn(CellValue) -> CellValue;

/// Search key for plain text cells.
///
/// # Examples
///
/// ```
/// use tablefold_core::hooks::normalize_for_sort;
/// use tablefold_types::CellValue;
///
/// assert_eq!(normalize_for_sort("Zürich".into()), CellValue::from("Zurich"));
/// assert_eq!(normalize_for_sort(CellValue::Null), CellValue::from(""));
/// assert_eq!(normalize_for_sort(42i64.into()), CellValue::Number(42.0));
/// ```
pub fn normalize_for_sort(value: CellValue) -> CellValue {
    map_text(value, |text| fold_accents(&text))
}

/// Search key for cells whose content may contain markup.
///
/// Tags are stripped before folding.
pub fn normalize_for_html(value: CellValue) -> CellValue {
    map_text(value, |text| fold_accents(&strip_tags(&text)))
}

/// Runs the hook for `kind`.
#[inline]
pub fn normalize(kind: SearchType, value: CellValue) -> CellValue {
    hook_for(kind)(value)
}

/// Returns the folding hook for a slot.
#[must_use]
#[inline]
pub const fn hook_for(kind: SearchType) -> SearchHook {
    match kind {
        SearchType::String => normalize_for_sort,
        SearchType::Html => normalize_for_html,
    }
}

/// Folds a free-text search input the same way cell keys are folded.
///
/// Without this, a query typed as `"Zürich"` would miss keys folded to
/// `"Zurich"`.
#[inline]
pub fn normalize_query(query: &str) -> String {
    fold_accents(query)
}

fn map_text<F>(value: CellValue, f: F) -> CellValue
where
    F: FnOnce(String) -> String,
{
    if value.is_falsy() {
        return CellValue::empty();
    }
    match value {
        CellValue::Text(text) => CellValue::Text(f(text)),
        other => other,
    }
}
