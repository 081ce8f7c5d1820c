//! Search hook registry.
//!
//! Hosts look hooks up by slot name (`"string"`, `"html"`, ...) when they need
//! a filterable form of a cell. [`install`] puts the accent-folding hooks into
//! a registry; [`global`] is the process-wide registry with them already
//! installed.

use std::sync::{OnceLock, RwLock};

use rustc_hash::FxHashMap;
use tablefold_types::{CellValue, SearchType};
use tracing::{debug, trace};

use crate::hooks::{hook_for, SearchHook};

/// Slot name to hook map.
#[derive(Debug, Clone, Default)]
pub struct SearchTypeRegistry {
    hooks: FxHashMap<String, SearchHook>,
}

impl SearchTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the accent-folding hooks installed.
    pub fn with_accent_folding() -> Self {
        let mut registry = Self::new();
        install(&mut registry);
        registry
    }

    /// Registers `hook` under `name`, returning the hook it replaced.
    pub fn register(&mut self, name: impl Into<String>, hook: SearchHook) -> Option<SearchHook> {
        self.hooks.insert(name.into(), hook)
    }

    /// Looks up the hook for `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<SearchHook> {
        self.hooks.get(name).copied()
    }

    /// Returns `true` if a hook is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Runs the hook registered under `name`.
    ///
    /// A slot with no hook leaves the value unchanged.
    pub fn apply(&self, name: &str, value: CellValue) -> CellValue {
        match self.get(name) {
            Some(hook) => hook(value),
            None => {
                trace!(slot = name, "no search hook registered");
                value
            }
        }
    }

    /// Number of registered slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

/// Registers the accent-folding hooks under the `"string"` and `"html"` slots.
///
/// Existing hooks in those slots are replaced.
pub fn install(registry: &mut SearchTypeRegistry) {
    for kind in SearchType::ALL {
        let replaced = registry.register(kind.name(), hook_for(kind)).is_some();
        debug!(slot = kind.name(), replaced, "installed accent-folding search hook");
    }
}

/// The process-wide registry, created on first use with folding installed.
pub fn global() -> &'static RwLock<SearchTypeRegistry> {
    static GLOBAL: OnceLock<RwLock<SearchTypeRegistry>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(SearchTypeRegistry::with_accent_folding()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn shout(value: CellValue) -> CellValue {
        match value {
            CellValue::Text(s) => CellValue::Text(s.to_uppercase()),
            other => other,
        }
    }

    #[test]
    fn empty_registry() {
        let registry = SearchTypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("string").is_none());
    }

    #[test]
    fn unknown_slot_passes_value_through() {
        let registry = SearchTypeRegistry::new();
        assert_eq!(registry.apply("string", "Zürich".into()), CellValue::from("Zürich"));
        assert_eq!(registry.apply("num", CellValue::Null), CellValue::Null);
    }

    #[test]
    fn install_registers_both_slots() {
        let registry = SearchTypeRegistry::with_accent_folding();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("string"));
        assert!(registry.contains("html"));

        assert_eq!(registry.apply("string", "<b>Zürich</b>".into()), CellValue::from("<b>Zurich</b>"));
        assert_eq!(registry.apply("html", "<b>Zürich</b>".into()), CellValue::from("Zurich"));
        assert_eq!(registry.apply("html", CellValue::Bool(true)), CellValue::Bool(true));
    }

    #[test]
    fn install_replaces_existing_hooks() {
        let mut registry = SearchTypeRegistry::new();
        registry.register("string", shout);
        registry.register("date", shout);

        install(&mut registry);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.apply("string", "é".into()), CellValue::from("e"));
        assert_eq!(registry.apply("date", "é".into()), CellValue::from("É"));
    }

    #[test]
    fn register_returns_previous() {
        let mut registry = SearchTypeRegistry::new();
        assert!(registry.register("string", shout).is_none());
        assert!(registry.register("string", shout).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[traced_test]
    fn install_logs_each_slot() {
        let mut registry = SearchTypeRegistry::new();
        registry.register("html", shout);
        install(&mut registry);

        assert!(logs_contain("installed accent-folding search hook"));
        assert!(logs_contain("string"));
        assert!(logs_contain("replaced=true"));
    }

    #[test]
    fn global_has_folding_hooks() {
        let registry = global().read().expect("registry lock poisoned");
        assert_eq!(registry.apply("string", "Zürich".into()), CellValue::from("Zurich"));
        assert_eq!(registry.apply("html", "<i>ñ</i>".into()), CellValue::from("n"));
    }
}
