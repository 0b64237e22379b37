//! Read-only function catalog
//!
//! Provides [`FunctionCatalog`], the process-wide registry of invocable
//! function definitions. Loaded once, never mutated.

use crate::builtin;
use crate::definition::FunctionDefinition;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<FunctionCatalog> = Lazy::new(|| FunctionCatalog::new(builtin::definitions()));

/// Fixed set of function definitions with lookup and search
#[derive(Debug, Clone, Default)]
pub struct FunctionCatalog {
    entries: Vec<FunctionDefinition>,
}

impl FunctionCatalog {
    /// Create a catalog from a list of definitions (insertion order kept)
    #[inline]
    #[must_use]
    pub fn new(entries: Vec<FunctionDefinition>) -> Self {
        Self { entries }
    }

    /// The built-in catalog, loaded once per process
    #[inline]
    #[must_use]
    pub fn builtin() -> &'static FunctionCatalog {
        &BUILTIN
    }

    /// All definitions in insertion order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[FunctionDefinition] {
        &self.entries
    }

    /// Number of definitions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a definition by its unique name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&FunctionDefinition> {
        self.entries.iter().find(|f| f.name == name)
    }

    /// Group definitions by category, preserving insertion order
    ///
    /// Categories appear in the order they first occur; definitions keep
    /// their catalog order within each group.
    #[must_use]
    pub fn by_category(&self) -> IndexMap<&str, Vec<&FunctionDefinition>> {
        let mut groups: IndexMap<&str, Vec<&FunctionDefinition>> = IndexMap::new();
        for def in &self.entries {
            groups.entry(def.category.as_str()).or_default().push(def);
        }
        groups
    }

    /// Case-insensitive substring search over name, description, or category
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<&FunctionDefinition> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&needle)
                    || f.description.to_lowercase().contains(&needle)
                    || f.category.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
