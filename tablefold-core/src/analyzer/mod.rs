//! Text analysis for search keys.
//!
//! - **Fold**: Replaces accented characters with their base letters
//! - **Markup**: Strips `<...>` tags from HTML-flavored cell content

pub mod fold;
pub mod markup;

pub use fold::{fold_accents, AccentFolder, FoldRule, FOLD_RULES};
pub use markup::{strip_tags, strip_tags_into};
