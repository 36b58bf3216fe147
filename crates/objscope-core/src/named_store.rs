//! Named object store: user-chosen names for loaded values.
//!
//! Backed by a shared `Value::Map` handle so the store itself is
//! walkable and path-addressable (`loaded['name']...`) exactly like any
//! other part of the graph. Entries live until process exit; there is no
//! removal operation.

use crate::errors::{ObjScopeError, Result};
use crate::model::{SharedValue, Value};

/// Identifier the store's backing map is bound to in root bindings.
pub const STORE_ROOT: &str = "loaded";

/// Mapping from user-chosen names to loaded value handles.
#[derive(Debug, Clone)]
pub struct NamedObjectStore {
    entries: SharedValue,
}

impl Default for NamedObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NamedObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: Value::Map(Default::default()).into_shared(),
        }
    }

    /// Insert under a fresh name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` when the name is taken; the prior value
    /// is retained unchanged. Overwriting requires the caller to have
    /// obtained explicit confirmation and call [`put_overwrite`].
    ///
    /// [`put_overwrite`]: NamedObjectStore::put_overwrite
    pub fn put(&mut self, name: &str, value: SharedValue) -> Result<()> {
        if self.contains(name) {
            return Err(ObjScopeError::DuplicateName {
                name: name.to_string(),
            });
        }
        self.put_overwrite(name, value);
        Ok(())
    }

    /// Insert unconditionally, replacing any existing entry.
    pub fn put_overwrite(&mut self, name: &str, value: SharedValue) {
        if let Value::Map(entries) = &mut *self.entries.borrow_mut() {
            entries.insert(name.to_string(), value);
        }
    }

    /// Look up a name.
    pub fn get(&self, name: &str) -> Option<SharedValue> {
        match &*self.entries.borrow() {
            Value::Map(entries) => entries.get(name).cloned(),
            _ => None,
        }
    }

    /// Whether a name is taken
    pub fn contains(&self, name: &str) -> bool {
        match &*self.entries.borrow() {
            Value::Map(entries) => entries.contains_key(name),
            _ => false,
        }
    }

    /// Names in display order
    pub fn names(&self) -> Vec<String> {
        match &*self.entries.borrow() {
            Value::Map(entries) => entries.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Number of loaded objects
    pub fn len(&self) -> usize {
        match &*self.entries.borrow() {
            Value::Map(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The backing map handle, for walking and root binding.
    pub fn as_value(&self) -> SharedValue {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut store = NamedObjectStore::new();
        store.put("cfg", Value::Int(1).into_shared()).unwrap();
        assert_eq!(*store.get("cfg").unwrap().borrow(), Value::Int(1));
        assert_eq!(store.names(), ["cfg"]);
    }

    #[test]
    fn test_duplicate_name_retains_prior_value() {
        let mut store = NamedObjectStore::new();
        store.put("cfg", Value::Int(1).into_shared()).unwrap();

        let err = store.put("cfg", Value::Int(2).into_shared()).unwrap_err();
        assert_eq!(err.code(), "ERR_DUPLICATE_NAME");
        assert_eq!(*store.get("cfg").unwrap().borrow(), Value::Int(1));
    }

    #[test]
    fn test_put_overwrite_replaces() {
        let mut store = NamedObjectStore::new();
        store.put("cfg", Value::Int(1).into_shared()).unwrap();
        store.put_overwrite("cfg", Value::Int(2).into_shared());
        assert_eq!(*store.get("cfg").unwrap().borrow(), Value::Int(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_backing_map_is_walkable() {
        use crate::path::ObjectPath;
        use crate::traversal::expand;

        let mut store = NamedObjectStore::new();
        store.put("nums", Value::seq(vec![Value::Int(7)]).into_shared()).unwrap();

        let nodes = expand(&store.as_value(), &ObjectPath::root(STORE_ROOT), 0, 3);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].path.to_string(), "loaded['nums']");
    }
}
