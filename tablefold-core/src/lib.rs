//! Accent-folded search keys for table filtering.
//!
//! A host table asks for a filterable form of each cell through a named hook
//! slot. This crate provides those hooks: text is folded so that `"Zurich"`
//! matches `"Zürich"`, and HTML-flavored cells have their tags stripped first.
//!
//! ```
//! use tablefold_core::{normalize_for_html, normalize_query};
//! use tablefold_types::CellValue;
//!
//! let key = normalize_for_html(CellValue::from("<b>Zürich</b>"));
//! assert_eq!(key, CellValue::from("Zurich"));
//! assert_eq!(normalize_query("Zürich"), "Zurich");
//! ```

pub mod analyzer;
pub mod arena;
pub mod column;
pub mod hooks;
pub mod registry;

pub use analyzer::{fold_accents, strip_tags, AccentFolder};
pub use column::FilterColumn;
pub use hooks::{normalize, normalize_for_html, normalize_for_sort, normalize_query, SearchHook};
pub use registry::{install, SearchTypeRegistry};
