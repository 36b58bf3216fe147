//! Registry of composite type tags known to this process.
//!
//! Rust has no runtime reflection, so the set of composite types the
//! browser understands is explicit: anything that implements
//! [`Introspectable`](crate::model::Introspectable) registers its tag
//! here. The native-format decoder consults the registry — a stream
//! carrying an unregistered tag fails with an unknown-type error instead
//! of materializing a composite this process has no definition for.

use std::collections::BTreeMap;

use crate::errors::{ObjScopeError, Result};

/// Descriptor for one registered composite type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    /// Runtime type tag
    pub type_name: String,

    /// One-line description shown in listings
    pub doc: String,
}

/// Known composite type tags, in tag order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: BTreeMap<String, TypeEntry>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type tag. Re-registering the same tag replaces its entry.
    pub fn register(&mut self, type_name: impl Into<String>, doc: impl Into<String>) {
        let type_name = type_name.into();
        self.entries.insert(
            type_name.clone(),
            TypeEntry {
                type_name,
                doc: doc.into(),
            },
        );
    }

    /// Whether a tag is known
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Require a tag to be known.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTypeTag` when the tag was never registered.
    pub fn require(&self, type_name: &str) -> Result<&TypeEntry> {
        self.entries
            .get(type_name)
            .ok_or_else(|| ObjScopeError::UnknownTypeTag {
                type_name: type_name.to_string(),
            })
    }

    /// Registered entries in tag order
    pub fn entries(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.values()
    }

    /// Number of registered tags
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tags are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
